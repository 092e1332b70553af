//! Typed Tcl script assembly
//!
//! A script is a set of [`Section`]s keyed by [`SectionKind`]. Sections are
//! rendered in [`SectionKind::ORDER`] regardless of the order they were filled
//! in, and every command carries the [`FailurePolicy`] that decides how it is
//! wrapped.

use std::fmt::Write;

/// How a failing command affects the rest of the script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Emitted as is; a tool error stops the script
    Fatal,
    /// Wrapped in `catch`; a tool error is ignored
    Guarded,
    /// Wrapped in `catch` and followed by an explicit `exit 1` on error
    Checked,
}

/// One element of a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Comment(String),
    Exec {
        text: String,
        policy: FailurePolicy,
    },
    /// `<head> { <body> }`, e.g. an `if` or `foreach`
    Block {
        head: String,
        body: Vec<Command>,
    },
    Blank,
}

impl Command {
    pub fn comment(text: impl Into<String>) -> Self {
        Command::Comment(text.into())
    }

    pub fn fatal(text: impl Into<String>) -> Self {
        Command::Exec {
            text: text.into(),
            policy: FailurePolicy::Fatal,
        }
    }

    pub fn guarded(text: impl Into<String>) -> Self {
        Command::Exec {
            text: text.into(),
            policy: FailurePolicy::Guarded,
        }
    }

    pub fn checked(text: impl Into<String>) -> Self {
        Command::Exec {
            text: text.into(),
            policy: FailurePolicy::Checked,
        }
    }

    pub fn block(head: impl Into<String>, body: Vec<Command>) -> Self {
        Command::Block {
            head: head.into(),
            body,
        }
    }

    fn render(&self, indent: usize, out: &mut String) {
        let pad = "  ".repeat(indent);
        match self {
            Command::Comment(text) => {
                let _ = writeln!(out, "{pad}# {text}");
            }
            Command::Exec { text, policy } => match policy {
                FailurePolicy::Fatal => {
                    let _ = writeln!(out, "{pad}{text}");
                }
                FailurePolicy::Guarded => {
                    let _ = writeln!(out, "{pad}catch {{ {text} }}");
                }
                FailurePolicy::Checked => {
                    let _ = writeln!(out, "{pad}if {{ [catch {{ {text} }} err] }} {{");
                    let _ = writeln!(out, "{pad}  puts \"ERROR: {}: $err\"", escape_quoted(text));
                    let _ = writeln!(out, "{pad}  exit 1");
                    let _ = writeln!(out, "{pad}}}");
                }
            },
            Command::Block { head, body } => {
                let _ = writeln!(out, "{pad}{head} {{");
                for command in body {
                    command.render(indent + 1, out);
                }
                let _ = writeln!(out, "{pad}}}");
            }
            Command::Blank => out.push('\n'),
        }
    }
}

/// Script sections, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SectionKind {
    Header,
    Generics,
    ExternalIpRepos,
    SynthesisOptions,
    ImplementationOptions,
    Constraints,
    HdlSources,
    IpCores,
    BlockDesigns,
    TopModule,
    BuildLaunch,
}

impl SectionKind {
    pub const ORDER: [SectionKind; 11] = [
        SectionKind::Header,
        SectionKind::Generics,
        SectionKind::ExternalIpRepos,
        SectionKind::SynthesisOptions,
        SectionKind::ImplementationOptions,
        SectionKind::Constraints,
        SectionKind::HdlSources,
        SectionKind::IpCores,
        SectionKind::BlockDesigns,
        SectionKind::TopModule,
        SectionKind::BuildLaunch,
    ];

    /// Banner comment printed above the section
    pub fn title(self) -> Option<&'static str> {
        match self {
            SectionKind::Header => None,
            SectionKind::Generics => Some("generics"),
            SectionKind::ExternalIpRepos => Some("external ip repositories"),
            SectionKind::SynthesisOptions => Some("synthesis options"),
            SectionKind::ImplementationOptions => Some("implementation options"),
            SectionKind::Constraints => Some("add constraints"),
            SectionKind::HdlSources => Some("add hdl sources"),
            SectionKind::IpCores => Some("add ip"),
            SectionKind::BlockDesigns => Some("BD files"),
            SectionKind::TopModule => Some("top module"),
            SectionKind::BuildLaunch => Some("build"),
        }
    }
}

/// Commands of one section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    kind: SectionKind,
    commands: Vec<Command>,
}

impl Section {
    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn push(&mut self, command: Command) -> &mut Self {
        self.commands.push(command);
        self
    }
}

/// Accumulates sections and renders them in contract order
#[derive(Debug, Default)]
pub struct ScriptBuilder {
    sections: Vec<Section>,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Section of `kind`, created empty on first access
    pub fn section(&mut self, kind: SectionKind) -> &mut Section {
        let index = match self.sections.iter().position(|s| s.kind == kind) {
            Some(index) => index,
            None => {
                self.sections.push(Section {
                    kind,
                    commands: Vec::new(),
                });
                self.sections.len() - 1
            }
        };
        &mut self.sections[index]
    }

    /// Sections that hold at least one command, in emission order
    pub fn sections(&self) -> Vec<&Section> {
        SectionKind::ORDER
            .iter()
            .filter_map(|kind| self.sections.iter().find(|s| s.kind == *kind))
            .filter(|s| !s.commands.is_empty())
            .collect()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for section in self.sections() {
            if let Some(title) = section.kind.title() {
                let _ = writeln!(out, "\n# {title}");
            }
            for command in &section.commands {
                command.render(0, &mut out);
            }
        }
        out
    }
}

/// Quote a value as a single Tcl word.
///
/// Plain values pass through. Values Tcl would split or substitute are
/// brace-quoted, unless their braces are unbalanced or they end in a
/// backslash; those are backslash-escaped character by character instead.
pub fn tcl_word(value: &str) -> String {
    if value.is_empty() {
        return "{}".to_string();
    }
    if !value.chars().any(is_tcl_special) {
        return value.to_string();
    }
    if braces_balanced(value) && !value.ends_with('\\') {
        return format!("{{{value}}}");
    }

    let mut out = String::with_capacity(value.len() * 2);
    for c in value.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if is_tcl_special(c) => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}

fn is_tcl_special(c: char) -> bool {
    c.is_whitespace() || matches!(c, '$' | '[' | ']' | ';' | '"' | '\\' | '{' | '}')
}

/// Braces nest properly; backslash-escaped braces do not count
fn braces_balanced(value: &str) -> bool {
    let mut depth = 0usize;
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '{' => depth += 1,
            '}' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

fn escape_quoted(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('[', "\\[")
        .replace(']', "\\]")
        .replace('$', "\\$")
}
