//! Compiled alias-matching rules.
//!
//! Every unit and ingredient carries one [`AliasMatcher`]: its aliases compiled
//! into a single regex under one of two policies. Aliases are always literal
//! text; regex metacharacters inside them (`fl. oz`, `deg C`) are escaped.
//!
//! - [`MatchPolicy::Prefix`] is the unit policy. An alias must start the
//!   candidate, may be followed by a plural `s` and/or a trailing `.`, and must
//!   then hit end-of-string or a word boundary. `"cups."` matches `cup`,
//!   `"tsp"` does not match `t`, and `"a cup"` matches nothing.
//! - [`MatchPolicy::Anywhere`] is the ingredient policy. An alias may occur
//!   anywhere in the candidate, so `"all-purpose flour"` matches `flour`.

use regex::{Regex, RegexBuilder};

use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Anchored at the start, optional `s`/`.` suffix, ends on a word boundary.
    Prefix,
    /// Unanchored substring search.
    Anywhere,
}

#[derive(Debug, Clone)]
pub struct AliasMatcher {
    aliases: Vec<String>,
    policy: MatchPolicy,
    case_sensitive: bool,
    sensitive: Regex,
    insensitive: Regex,
}

impl AliasMatcher {
    /// Compile `aliases` under `policy`.
    ///
    /// Duplicate aliases are dropped (first occurrence kept). Fails if the list
    /// is empty or any alias is the empty string, since either would make the
    /// rule match arbitrary text.
    pub fn new<I, S>(aliases: I, policy: MatchPolicy, case_sensitive: bool) -> CoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for alias in aliases {
            let alias = alias.into();
            if alias.is_empty() {
                return Err(CoreError::InvalidArg {
                    what: "alias must not be empty",
                });
            }
            if !unique.contains(&alias) {
                unique.push(alias);
            }
        }
        if unique.is_empty() {
            return Err(CoreError::InvalidArg {
                what: "alias list must not be empty",
            });
        }

        let sensitive = compile(&unique, policy, true)?;
        let insensitive = compile(&unique, policy, false)?;
        tracing::trace!(?policy, case_sensitive, aliases = ?unique, "compiled alias rule");

        Ok(Self {
            aliases: unique,
            policy,
            case_sensitive,
            sensitive,
            insensitive,
        })
    }

    /// Match using the rule's own case flag.
    pub fn is_match(&self, text: &str) -> bool {
        self.is_match_with(text, self.case_sensitive)
    }

    /// Match with an explicit case flag, overriding the rule's default.
    pub fn is_match_with(&self, text: &str, case_sensitive: bool) -> bool {
        if case_sensitive {
            self.sensitive.is_match(text)
        } else {
            self.insensitive.is_match(text)
        }
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}

fn compile(aliases: &[String], policy: MatchPolicy, case_sensitive: bool) -> CoreResult<Regex> {
    let alternation = aliases
        .iter()
        .map(|alias| regex::escape(alias))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = match policy {
        MatchPolicy::Prefix => format!(r"^(?:{alternation})s?\.?(?:$|\b)"),
        MatchPolicy::Anywhere => format!("(?:{alternation})"),
    };
    Ok(RegexBuilder::new(&pattern)
        .case_insensitive(!case_sensitive)
        .build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix(aliases: &[&str], case_sensitive: bool) -> AliasMatcher {
        AliasMatcher::new(aliases.iter().copied(), MatchPolicy::Prefix, case_sensitive).unwrap()
    }

    #[test]
    fn prefix_accepts_plural_and_period() {
        let cup = prefix(&["cup", "c"], false);
        assert!(cup.is_match("cup"));
        assert!(cup.is_match("cups"));
        assert!(cup.is_match("cups."));
        assert!(cup.is_match("c."));
        assert!(cup.is_match("Cups"));
        assert!(cup.is_match("cup of sugar"));
    }

    #[test]
    fn prefix_is_anchored() {
        let cup = prefix(&["cup"], false);
        assert!(!cup.is_match("a cup"));
        assert!(!cup.is_match("teacup"));
    }

    #[test]
    fn prefix_requires_word_boundary() {
        let tsp = prefix(&["t"], true);
        assert!(tsp.is_match("t"));
        assert!(tsp.is_match("t."));
        assert!(!tsp.is_match("tsp"));
        assert!(!tsp.is_match("tablespoon"));
    }

    #[test]
    fn aliases_are_literal_text() {
        let dram = prefix(&["fl.dr"], false);
        assert!(dram.is_match("fl.dr"));
        assert!(!dram.is_match("flxdr"));
    }

    #[test]
    fn case_flag_and_override() {
        let tbsp = prefix(&["T", "Tbsp"], true);
        assert!(tbsp.is_match("T"));
        assert!(!tbsp.is_match("t"));
        assert!(!tbsp.is_match("TBSP"));
        assert!(tbsp.is_match_with("TBSP", false));
    }

    #[test]
    fn anywhere_is_unanchored_and_case_sensitive() {
        let flour = AliasMatcher::new(["flour"], MatchPolicy::Anywhere, true).unwrap();
        assert!(flour.is_match("flour"));
        assert!(flour.is_match("all-purpose flour"));
        assert!(flour.is_match("flours"));
        assert!(!flour.is_match("Flour"));
        assert!(!flour.is_match("sugar"));
    }

    #[test]
    fn duplicates_collapse_in_order() {
        let m = prefix(&["liter", "l", "liter"], false);
        assert_eq!(m.aliases(), &["liter".to_string(), "l".to_string()]);
    }

    #[test]
    fn empty_aliases_are_rejected() {
        let none: [&str; 0] = [];
        assert!(matches!(
            AliasMatcher::new(none, MatchPolicy::Prefix, false),
            Err(CoreError::InvalidArg { .. })
        ));
        assert!(matches!(
            AliasMatcher::new(["cup", ""], MatchPolicy::Anywhere, false),
            Err(CoreError::InvalidArg { .. })
        ));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn alias_with_suffix_always_matches(
            alias in "[a-z]{1,8}",
            plural in any::<bool>(),
            period in any::<bool>(),
        ) {
            let m = AliasMatcher::new([alias.clone()], MatchPolicy::Prefix, false).unwrap();
            let mut text = alias;
            if plural {
                text.push('s');
            }
            if period {
                text.push('.');
            }
            prop_assert!(m.is_match(&text));
        }

        #[test]
        fn anywhere_matches_embedded_alias(
            alias in "[a-z]{1,8}",
            before in "[ a-z]{0,6}",
            after in "[ a-z]{0,6}",
        ) {
            let m = AliasMatcher::new([alias.clone()], MatchPolicy::Anywhere, true).unwrap();
            let text = format!("{before}{alias}{after}");
            prop_assert!(m.is_match(&text));
        }
    }
}
