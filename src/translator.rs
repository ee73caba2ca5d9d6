//! Pattern-matching translator: free-text logic + scenario label -> canned template.
//!
//! Matching is an ordered table of keyword rules. The haystack is the
//! lowercased logic text joined with the lowercased scenario label; the first
//! rule with any keyword present wins and an unmatched (or empty) input falls
//! back to the basic conditional template. There are no error cases.
//!
//! Adding a template means adding a rule to the table; earlier rules keep
//! their priority.

use tracing::{debug, instrument};

use crate::domain::{CodeGenerationResult, TemplateKind};
use crate::templates::template;

/// One routing entry: any keyword hit selects `template`.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchRule {
  pub keywords: Vec<String>,
  pub template: TemplateKind,
}

impl MatchRule {
  pub fn new(keywords: &[&str], template: TemplateKind) -> Self {
    Self {
      keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
      template,
    }
  }

  fn matches(&self, haystack: &str) -> bool {
    self.keywords.iter().any(|k| !k.is_empty() && haystack.contains(k.as_str()))
  }
}

/// Default routing table, highest priority first.
pub fn default_rules() -> Vec<MatchRule> {
  vec![
    MatchRule::new(&["weather", "wear"], TemplateKind::Weather),
    MatchRule::new(&["sort", "books"], TemplateKind::Sorting),
    MatchRule::new(&["meal", "food"], TemplateKind::Meal),
    MatchRule::new(&["grade", "score"], TemplateKind::Grade),
    MatchRule::new(&["budget", "expense"], TemplateKind::Budget),
    MatchRule::new(&["task", "schedule"], TemplateKind::Scheduler),
    MatchRule::new(&["pathfinding", "maze"], TemplateKind::Pathfinding),
    MatchRule::new(&["trading", "finance"], TemplateKind::Trading),
    MatchRule::new(&["inventory", "management"], TemplateKind::Inventory),
  ]
}

#[derive(Clone, Debug)]
pub struct Translator {
  rules: Vec<MatchRule>,
  fallback: TemplateKind,
}

impl Default for Translator {
  fn default() -> Self {
    Self::with_rules(default_rules())
  }
}

impl Translator {
  pub fn with_rules(rules: Vec<MatchRule>) -> Self {
    Self { rules, fallback: TemplateKind::Basic }
  }

  /// Pick the template for this input without materializing it.
  pub fn select(&self, logic: &str, scenario: &str) -> TemplateKind {
    let haystack = format!("{}\n{}", logic.to_lowercase(), scenario.to_lowercase());
    self
      .rules
      .iter()
      .find(|r| r.matches(&haystack))
      .map(|r| r.template)
      .unwrap_or(self.fallback)
  }

  #[instrument(level = "debug", target = "translator", skip(self, logic, scenario), fields(logic_len = logic.len(), scenario_len = scenario.len()))]
  pub fn translate(&self, logic: &str, scenario: &str) -> CodeGenerationResult {
    let kind = self.select(logic, scenario);
    debug!(target: "translator", template = ?kind, fallback = kind == self.fallback, "Template selected");
    template(kind).to_result(kind)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn weather_example_from_the_weather_scenario() {
    let t = Translator::default();
    let out = t.translate(
      "If it's sunny and over 75 degrees wear light clothes",
      "Weather-Based Clothing",
    );
    assert_eq!(out.template, TemplateKind::Weather);
    assert!(out.python.contains(r#"if weather == "sunny" and temperature > 75:"#));
    assert!(out.explanation.contains("conditional statements"));
  }

  #[test]
  fn weather_in_logic_wins_regardless_of_label_or_other_content() {
    let t = Translator::default();
    for label in ["Book Organization", "Budget Tracker", "", "Maze Pathfinding"] {
      let out = t.translate("sort my books by the WEATHER and my grade", label);
      assert_eq!(out.template, TemplateKind::Weather, "label {label:?}");
    }
  }

  #[test]
  fn label_without_a_keyword_falls_back() {
    let t = Translator::default();
    // "Book Organization" holds neither "sort" nor "books".
    assert_eq!(t.select("I would do it carefully", "Book Organization"), TemplateKind::Basic);
    assert_eq!(t.select("", ""), TemplateKind::Basic);
  }

  #[test]
  fn label_alone_routes_when_logic_has_no_keywords() {
    let t = Translator::default();
    assert_eq!(t.select("I would do it carefully", "Sorting books"), TemplateKind::Sorting);
    assert_eq!(t.select("I would do it carefully", "Grade Calculator"), TemplateKind::Grade);
    assert_eq!(t.select("I would do it carefully", "Budget Tracker"), TemplateKind::Budget);
    assert_eq!(t.select("I would do it carefully", "Task Scheduler"), TemplateKind::Scheduler);
    assert_eq!(t.select("I would do it carefully", "Maze Pathfinding"), TemplateKind::Pathfinding);
    assert_eq!(t.select("I would do it carefully", "Automated Trading Rules"), TemplateKind::Trading);
    assert_eq!(t.select("I would do it carefully", "Inventory check"), TemplateKind::Inventory);
    assert_eq!(t.select("I would do it carefully", "Meal Planning"), TemplateKind::Meal);
  }

  #[test]
  fn priority_order_first_match_wins() {
    let t = Translator::default();
    // "sort" outranks "inventory"
    assert_eq!(t.select("", "Sorting Your Inventory in a Fantasy RPG"), TemplateKind::Sorting);
    // "grade" outranks "budget"
    assert_eq!(t.select("budget for my grade", ""), TemplateKind::Grade);
  }

  #[test]
  fn unmatched_and_empty_inputs_fall_back_idempotently() {
    let t = Translator::default();
    let a = t.translate("jump when the light turns green", "Traffic lights");
    let b = t.translate("jump when the light turns green", "Traffic lights");
    assert_eq!(a.template, TemplateKind::Basic);
    assert_eq!(a, b);
    assert_eq!(t.translate("", "").template, TemplateKind::Basic);
  }

  #[test]
  fn custom_rules_are_additive() {
    let mut rules = default_rules();
    rules.push(MatchRule::new(&["Traffic"], TemplateKind::Grade));
    let t = Translator::with_rules(rules);
    assert_eq!(t.select("", "traffic lights"), TemplateKind::Grade);
    assert_eq!(t.select("", "weather"), TemplateKind::Weather);
  }

  #[test]
  fn every_template_has_both_languages() {
    for rule in default_rules() {
      let out = template(rule.template).to_result(rule.template);
      assert!(out.python.contains("def "));
      assert!(out.javascript.contains("function "));
      assert!(!out.explanation.is_empty());
    }
  }
}
