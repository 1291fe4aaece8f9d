//! `draftcheck rules`: list every field rule and its exact message.

use std::io;

use draftcheck_core::application::{RuleInfo, RuleService};

use crate::{
    cli::{RulesArgs, RulesFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: RulesArgs, output: OutputManager) -> CliResult<()> {
    let rules = match args.field {
        Some(field) => RuleService::for_field(field),
        None => RuleService::catalogue(),
    };

    match args.format {
        RulesFormat::Table => {
            output.header("Validation rules:")?;
            let mut current = "";
            for rule in &rules {
                if rule.field != current {
                    current = rule.field;
                    output.print("")?;
                    output.print(&field_heading(rule))?;
                }
                output.print(&format!("  {:<26} {}", rule.code, rule.message))?;
            }
        }

        RulesFormat::Json => {
            let json = serde_json::to_string_pretty(&rules).map_err(std::io::Error::from)?;
            output.emit(&json)?;
        }

        RulesFormat::Csv => {
            let rendered = render_csv(&rules)?;
            output.emit(rendered.trim_end())?;
        }
    }

    Ok(())
}

fn field_heading(rule: &RuleInfo) -> String {
    let mut heading = format!("{} ({})", rule.label, rule.field);
    if rule.optional_field {
        heading.push_str(" - optional");
    }
    heading
}

/// One header row, then one row per rule.
fn render_csv(rules: &[RuleInfo]) -> io::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for rule in rules {
        writer.serialize(rule).map_err(io::Error::other)?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use draftcheck_core::domain::{FieldError, ProductField};

    #[test]
    fn csv_has_a_header_and_a_row_per_rule() {
        let rules = RuleService::catalogue();
        let rendered = render_csv(&rules).unwrap();

        let mut reader = csv::Reader::from_reader(rendered.as_bytes());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec!["field", "label", "code", "message", "optional_field", "cross_field"]
        );

        let records: Vec<_> = reader.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(records.len(), rules.len());
    }

    #[test]
    fn csv_quotes_messages_with_commas() {
        let rules = vec![RuleInfo::from(FieldError::SkuInvalidCharacters)];
        let rendered = render_csv(&rules).unwrap();
        assert!(rendered.contains(
            "\"SKU can only contain letters, numbers, hyphens, and underscores\""
        ));

        let mut reader = csv::Reader::from_reader(rendered.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[3], FieldError::SkuInvalidCharacters.to_string());
    }

    #[test]
    fn optional_fields_are_marked() {
        let sku = RuleInfo::from(FieldError::SkuTooLong);
        assert!(field_heading(&sku).ends_with("optional"));

        let title = RuleInfo::from(FieldError::TitleRequired);
        assert!(!field_heading(&title).contains("optional"));
    }

    #[test]
    fn field_filter_matches_service() {
        let rules = RuleService::for_field(ProductField::Sku);
        assert!(rules.iter().all(|r| r.field == "sku"));
    }
}
