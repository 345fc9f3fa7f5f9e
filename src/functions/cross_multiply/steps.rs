use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::FactorGroup;
use super::search::Targets;
use crate::functions::display::format_factorization;
use crate::syntax::CoeffKey;

// ─── Narration ──────────────────────────────────────────────────────

#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
  #[default]
  En,
  Zh,
}

impl FromStr for Locale {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "en" | "english" => Ok(Locale::En),
      "zh" | "zh-cn" | "chinese" => Ok(Locale::Zh),
      other => Err(format!("unknown locale: {other}")),
    }
  }
}

impl fmt::Display for Locale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Locale::En => "en",
      Locale::Zh => "zh",
    })
  }
}

/// Stages of the derivation, always emitted in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepKind {
  #[serde(rename = "intro")]
  Intro,
  #[serde(rename = "input_AB")]
  InputAB,
  #[serde(rename = "verify_xy")]
  VerifyXy,
  #[serde(rename = "input_K")]
  InputK,
  #[serde(rename = "verify_linear")]
  VerifyLinear,
  #[serde(rename = "final")]
  Final,
}

impl StepKind {
  pub const SEQUENCE: [StepKind; 6] = [
    StepKind::Intro,
    StepKind::InputAB,
    StepKind::VerifyXy,
    StepKind::InputK,
    StepKind::VerifyLinear,
    StepKind::Final,
  ];

  /// Opaque key a consumer maps to a narration clip.
  pub fn audio_key(self) -> &'static str {
    match self {
      StepKind::Intro => "intro",
      StepKind::InputAB => "input_ab",
      StepKind::VerifyXy => "verify_xy",
      StepKind::InputK => "input_k",
      StepKind::VerifyLinear => "verify_linear",
      StepKind::Final => "final",
    }
  }
}

/// Presentation data for the cross diagram: one column per variable with
/// the two split values, plus the rendered cross calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisualData {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub term_left: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub term_mid: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub term_right: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub col_left: Option<[i128; 2]>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub col_mid: Option<[i128; 2]>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub col_right: Option<[i128; 2]>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub cross_calc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorStep {
  pub kind: StepKind,
  pub audio_key: String,
  pub description: String,
  /// Coefficient the consumer should emphasise in the formula.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub highlight: Option<CoeffKey>,
  /// Whether the learner is asked to enter the split values here.
  pub interactive: bool,
  /// x column `[a1, a2]`.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub expected_left: Option<[i128; 2]>,
  /// y column `[b1, b2]`.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub expected_mid: Option<[i128; 2]>,
  /// constant column `[c1, c2]`.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub expected_right: Option<[i128; 2]>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub visual: Option<VisualData>,
}

impl FactorStep {
  fn new(kind: StepKind, description: String) -> Self {
    Self {
      kind,
      audio_key: kind.audio_key().to_string(),
      description,
      highlight: None,
      interactive: false,
      expected_left: None,
      expected_mid: None,
      expected_right: None,
      visual: None,
    }
  }

  fn highlight(mut self, key: CoeffKey) -> Self {
    self.highlight = Some(key);
    self
  }

  fn interactive(mut self) -> Self {
    self.interactive = true;
    self
  }
}

fn constant_label(locale: Locale) -> &'static str {
  match locale {
    Locale::En => "const",
    Locale::Zh => "常数",
  }
}

/// Build the six narrated steps for a split that already satisfies every
/// constraint against `t`.
pub(crate) fn narrate(
  t: &Targets,
  g1: &FactorGroup,
  g2: &FactorGroup,
  locale: Locale,
) -> Vec<FactorStep> {
  let (a1, b1, c1) = (g1.a, g1.b, g1.c);
  let (a2, b2, c2) = (g2.a, g2.b, g2.c);
  let col_left = [a1, a2];
  let col_mid = [b1, b2];
  let col_right = [c1, c2];

  let xy_calc = format!("{a1}×{b2} + {a2}×{b1} = {}", t.d);
  let linear_calc = format!(
    "x: {a1}×{c2} + {a2}×{c1} = {}\ny: {b1}×{c2} + {b2}×{c1} = {}",
    t.g, t.h
  );

  let (intro, input_ab, verify_xy, input_k, verify_linear, result) =
    match locale {
      Locale::En => (
        "Let's factor this polynomial with the cross-multiplication method"
          .to_string(),
        format!("First, split {}x² and {}y²", t.a, t.b),
        format!("Check the xy term: {a1} × {b2} + {a2} × {b1} = {}", t.d),
        format!("Now split the constant term {}", t.k),
        format!(
          "Check the x term: {a1} × {c2} + {a2} × {c1} = {}\n\
           Check the y term: {b1} × {c2} + {b2} × {c1} = {}",
          t.g, t.h
        ),
        format!("Factored result: {}", format_factorization(g1, g2)),
      ),
      Locale::Zh => (
        "让我们用十字相乘法分解这个多项式".to_string(),
        format!("首先，分解 {}x² 和 {}y²", t.a, t.b),
        format!("验证 xy 项: {a1} × {b2} + {a2} × {b1} = {}", t.d),
        format!("现在分解常数项 {}", t.k),
        format!(
          "验证 x 项: {a1} × {c2} + {a2} × {c1} = {}\n\
           验证 y 项: {b1} × {c2} + {b2} × {c1} = {}",
          t.g, t.h
        ),
        format!("因式分解结果: {}", format_factorization(g1, g2)),
      ),
    };

  let mut input_ab_step = FactorStep::new(StepKind::InputAB, input_ab)
    .highlight(CoeffKey::A)
    .interactive();
  input_ab_step.expected_left = Some(col_left);
  input_ab_step.expected_mid = Some(col_mid);

  let mut verify_xy_step =
    FactorStep::new(StepKind::VerifyXy, verify_xy).highlight(CoeffKey::D);
  verify_xy_step.expected_left = Some(col_left);
  verify_xy_step.expected_mid = Some(col_mid);
  verify_xy_step.visual = Some(VisualData {
    term_left: Some("x".into()),
    term_mid: Some("y".into()),
    col_left: Some(col_left),
    col_mid: Some(col_mid),
    cross_calc: Some(xy_calc),
    ..VisualData::default()
  });

  let mut input_k_step = FactorStep::new(StepKind::InputK, input_k)
    .highlight(CoeffKey::K)
    .interactive();
  input_k_step.expected_right = Some(col_right);

  let mut verify_linear_step =
    FactorStep::new(StepKind::VerifyLinear, verify_linear)
      .highlight(CoeffKey::G);
  verify_linear_step.expected_left = Some(col_left);
  verify_linear_step.expected_mid = Some(col_mid);
  verify_linear_step.expected_right = Some(col_right);
  verify_linear_step.visual = Some(VisualData {
    term_left: Some("x".into()),
    term_mid: Some("y".into()),
    term_right: Some(constant_label(locale).into()),
    col_left: Some(col_left),
    col_mid: Some(col_mid),
    col_right: Some(col_right),
    cross_calc: Some(linear_calc),
  });

  vec![
    FactorStep::new(StepKind::Intro, intro),
    input_ab_step,
    verify_xy_step,
    input_k_step,
    verify_linear_step,
    FactorStep::new(StepKind::Final, result),
  ]
}
