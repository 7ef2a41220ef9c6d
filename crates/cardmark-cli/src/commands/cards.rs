use cardmark_core::Registry;

use crate::error::CliError;

use super::CommandResult;

pub fn run(registry: &Registry) -> Result<CommandResult, CliError> {
    let data = serde_json::json!({ "cards": registry });

    let mut lines = Vec::new();
    for descriptor in registry.iter() {
        lines.push(format!(
            "{:<13} {:<16} {}",
            descriptor.type_name, descriptor.label, descriptor.usage
        ));
        for parameter in &descriptor.parameters {
            let choices = if parameter.choices.is_empty() {
                String::new()
            } else {
                format!(": {}", parameter.choices.join("|"))
            };
            lines.push(format!(
                "{:<13}   {} ({}{choices}), default {}",
                "",
                parameter.name,
                if parameter.required { "required" } else { "optional" },
                parameter.default
            ));
        }
    }
    let mut text = lines.join("\n");
    text.push('\n');

    Ok(CommandResult::ok(data, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_card_in_order() {
        let result = run(&Registry::standard()).expect("cards lists");
        let cards = result.data["cards"].as_array().expect("array");
        assert_eq!(cards.len(), 9);
        assert_eq!(cards[1]["type"], "kline");
        assert_eq!(cards[1]["parameters"][1]["choices"][3], "1Y");
        assert!(result.text.contains("#card orderbook <SYMBOL>"));
        assert!(result
            .text
            .contains("range (optional: 1D|1W|1M|1Y), default 1D"));
        assert!(result.text.ends_with('\n'));
    }
}
