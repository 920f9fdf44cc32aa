use std::io::{self, Write};

use martinize::{CysteineBridge, RunConfiguration, SecondaryStructureSource};

use crate::util::convert::{
    bond_source_display_name, elastic_unit_display_name, position_restraints_display_name,
};
use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub fn print_config_summary(config: &RunConfiguration) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    print_kv_table(&mut out, "Run Configuration", &summary_rows(config));
}

fn summary_rows(config: &RunConfiguration) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Input", config.input.display().to_string()),
        ("Output", config.output_structure.display().to_string()),
    ];

    if let Some(top) = &config.output_topology {
        rows.push(("Topology", top.display().to_string()));
    }

    rows.push((
        "Force Field",
        format!("{} → {}", config.from_force_field, config.force_field),
    ));
    rows.push(("Bonds From", bond_source_display_name(config.bonds_from).to_string()));

    let cys = match config.cystein_bridge {
        CysteineBridge::Auto => "auto".to_string(),
        CysteineBridge::None => "none".to_string(),
        CysteineBridge::Distance(d) => format!("≤ {} nm", d),
    };
    rows.push(("Cys Bridges", cys));

    let ss = match &config.secondary_structure {
        Some(SecondaryStructureSource::Dssp(path)) => format!("DSSP ({})", path.display()),
        Some(SecondaryStructureSource::Sequence(seq)) => format!("{} residues", seq.chars().count()),
        Some(SecondaryStructureSource::Collagen) => "collagen".to_string(),
        None => "none".to_string(),
    };
    rows.push(("Sec. Structure", ss));

    let restraints = position_restraints_display_name(config.position_restraints);
    rows.push(("Restraints", restraints.to_string()));

    let elastic = if config.elastic.enabled {
        format!(
            "{:.0} kJ/mol/nm², {}",
            config.elastic.force_constant,
            elastic_unit_display_name(config.elastic.unit)
        )
    } else {
        "off".to_string()
    };
    rows.push(("Elastic Network", elastic));

    if !config.mutations.is_empty() {
        rows.push(("Mutations", config.mutations.len().to_string()));
    }
    if !config.modifications.is_empty() {
        rows.push(("Modifications", config.modifications.len().to_string()));
    }

    rows
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<key_w$} │ {:>val_w$} │",
        INDENT,
        "Option",
        "Value",
        key_w = key_w,
        val_w = val_w
    );
    let _ = writeln!(
        out,
        "{}├{k_line}┼{v_line}┤",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
            key_w = key_w,
            val_w = val_w
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
    let _ = writeln!(out);
}

#[cfg(test)]
mod tests {
    use super::*;

    use martinize::{ResidueSpec, RunConfigBuilder};

    fn value<'a>(rows: &'a [(&str, String)], key: &str) -> Option<&'a str> {
        rows.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    #[test]
    fn default_rows_omit_optional_entries() {
        let config = RunConfigBuilder::new("in.pdb", "cg.pdb").build().unwrap();
        let rows = summary_rows(&config);
        assert_eq!(value(&rows, "Topology"), None);
        assert_eq!(value(&rows, "Mutations"), None);
        assert_eq!(value(&rows, "Cys Bridges"), Some("none"));
        assert_eq!(value(&rows, "Elastic Network"), Some("off"));
        assert_eq!(value(&rows, "Force Field"), Some("universal → martini3001"));
    }

    #[test]
    fn rows_reflect_resolved_options() {
        let config = RunConfigBuilder::new("in.pdb", "cg.pdb")
            .output_topology("topol.top")
            .cystein_bridge(CysteineBridge::Distance(0.24))
            .secondary_structure("HHHCCC")
            .nter("NH2")
            .cter("COOH")
            .mutate(ResidueSpec::new("A-PHE45", "ALA"))
            .build()
            .unwrap();
        let rows = summary_rows(&config);
        assert_eq!(value(&rows, "Topology"), Some("topol.top"));
        assert_eq!(value(&rows, "Cys Bridges"), Some("≤ 0.24 nm"));
        assert_eq!(value(&rows, "Sec. Structure"), Some("6 residues"));
        assert_eq!(value(&rows, "Modifications"), Some("2"));
        assert_eq!(value(&rows, "Mutations"), Some("1"));
    }
}
