use tracing::trace;

use crate::identifier::MEMBER_SEPARATOR;
use crate::locator::SymbolLocator;

/// What an unprefixed name denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameClass {
    Member,
    Container,
    Package,
}

struct Rule {
    class: NameClass,
    applies: fn(&str, &SymbolLocator) -> bool,
}

fn has_member_syntax(name: &str, _: &SymbolLocator) -> bool {
    name.contains(MEMBER_SEPARATOR) || name.contains(['(', ')'])
}

fn is_loadable_container(name: &str, locator: &SymbolLocator) -> bool {
    locator.contains_container(name)
}

fn always(_: &str, _: &SymbolLocator) -> bool {
    true
}

/// Evaluated in order; the first rule that applies wins. The last rule
/// always applies, so every name gets a class.
const RULES: &[Rule] = &[
    Rule {
        class: NameClass::Member,
        applies: has_member_syntax,
    },
    Rule {
        class: NameClass::Container,
        applies: is_loadable_container,
    },
    Rule {
        class: NameClass::Package,
        applies: always,
    },
];

pub fn classify(name: &str, locator: &SymbolLocator) -> NameClass {
    let class = RULES
        .iter()
        .find(|rule| (rule.applies)(name, locator))
        .map_or(NameClass::Package, |rule| rule.class);
    trace!(input = name, ?class, "classified name");
    class
}
