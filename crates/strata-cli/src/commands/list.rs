//! Implementation of the `strata list` command.

use serde::Serialize;

use strata_core::domain::{BLUEPRINT, RoleDef};

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

/// One scaffold role as shown to the user.
#[derive(Debug, Serialize)]
struct RoleRow {
    role: &'static str,
    layer: &'static str,
    kind: &'static str,
    pattern: String,
}

impl From<&RoleDef> for RoleRow {
    fn from(def: &RoleDef) -> Self {
        Self {
            role: def.role.as_str(),
            layer: def.layer.as_str(),
            kind: def.kind.as_str(),
            pattern: def.full_pattern(),
        }
    }
}

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let rows: Vec<RoleRow> = BLUEPRINT.iter().map(RoleRow::from).collect();

    match args.format {
        ListFormat::Table => {
            output.header("Scaffold roles:")?;
            let cells: Vec<Vec<String>> = rows
                .iter()
                .map(|r| {
                    vec![
                        r.role.to_string(),
                        r.layer.to_string(),
                        r.kind.to_string(),
                        r.pattern.clone(),
                    ]
                })
                .collect();
            output.table(&["role", "layer", "kind", "pattern"], &cells)?;
        }

        // Machine-readable formats go through `emit`/`json` so they stay
        // parseable under --quiet and in pipes.
        ListFormat::Json => output.json(&rows)?,

        ListFormat::List => {
            for row in &rows {
                output.emit(row.role)?;
            }
        }

        ListFormat::Csv => output.emit(&to_csv(&rows))?,
    }

    Ok(())
}

fn to_csv(rows: &[RoleRow]) -> String {
    let mut out = String::from("role,layer,kind,pattern\n");
    for r in rows {
        out.push_str(&format!("{},{},{},{}\n", r.role, r.layer, r.kind, r.pattern));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<RoleRow> {
        BLUEPRINT.iter().map(RoleRow::from).collect()
    }

    #[test]
    fn one_row_per_role() {
        assert_eq!(rows().len(), 13);
    }

    #[test]
    fn csv_has_header_and_thirteen_rows() {
        let csv = to_csv(&rows());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "role,layer,kind,pattern");
        assert_eq!(lines.len(), 14);
        assert!(lines.contains(&"dbal-repository,Infrastructure,class,Infrastructure\\{E}\\Dbal{E}Repository"));
    }

    #[test]
    fn json_uses_role_names() {
        let json = serde_json::to_value(rows()).unwrap();
        assert_eq!(json[0]["role"], "entity");
        assert_eq!(json[0]["layer"], "Domain");
    }
}
