//! Command table and help text.

use valman_types::Marker;

#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    /// Usage line; `{marker}` is replaced with the session marker.
    pub usage: &'static str,
    pub description: &'static str,
    /// Reserved keyword, if the form is a verb.
    pub verb: Option<&'static str>,
}

const COMMAND_SPECS: &[CommandSpec] = &[
    CommandSpec {
        usage: "<name>",
        description: "Select an entry and show its value",
        verb: None,
    },
    CommandSpec {
        usage: "<name> {marker} <value>",
        description: "Assign to an existing entry",
        verb: None,
    },
    CommandSpec {
        usage: "list",
        description: "List all entries",
        verb: Some("list"),
    },
    CommandSpec {
        usage: "help",
        description: "Show available commands",
        verb: Some("help"),
    },
    CommandSpec {
        usage: "add <name> {marker} <value>",
        description: "Create or overwrite an entry",
        verb: Some("add"),
    },
    CommandSpec {
        usage: "erase <name>",
        description: "Remove an entry",
        verb: Some("erase"),
    },
    CommandSpec {
        usage: "store [file]",
        description: "Write all entries to a file",
        verb: Some("store"),
    },
    CommandSpec {
        usage: "load [file]",
        description: "Merge entries from a file",
        verb: Some("load"),
    },
    CommandSpec {
        usage: "sqrt [name]",
        description: "Square root of the named or selected entry",
        verb: Some("sqrt"),
    },
    CommandSpec {
        usage: "pow [name] <exponent>",
        description: "Raise the named or selected entry to a power",
        verb: Some("pow"),
    },
    CommandSpec {
        usage: "clear",
        description: "Remove every entry",
        verb: Some("clear"),
    },
    CommandSpec {
        usage: "quit",
        description: "Exit the editor",
        verb: Some("quit"),
    },
];

#[must_use]
pub fn command_specs() -> &'static [CommandSpec] {
    COMMAND_SPECS
}

/// One line per command form, usage column aligned.
#[must_use]
pub fn help_text(marker: &Marker) -> String {
    let usages: Vec<String> = COMMAND_SPECS
        .iter()
        .map(|spec| spec.usage.replace("{marker}", marker.as_str()))
        .collect();
    let width = usages.iter().map(|u| u.chars().count()).max().unwrap_or(0);

    let mut out = String::from("Commands:\n");
    for (usage, spec) in usages.iter().zip(COMMAND_SPECS) {
        out.push_str(&format!("  {usage:<width$}  {}\n", spec.description));
    }
    out.push_str("Partial names are completed when they match a single entry.");
    out
}
