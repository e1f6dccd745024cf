//! Password strength check.

use anyhow::Result;
use serde::Serialize;
use storefront_widgets::password::{PasswordRule, PasswordStrength};

use super::PasswordArgs;
use crate::context::Context;
use crate::output::strength_meter;

#[derive(Serialize)]
struct StrengthReport {
    score: usize,
    label: &'static str,
    ratio: f64,
    unmet: Vec<&'static str>,
}

/// Run the password command.
pub async fn run(args: PasswordArgs, ctx: &Context) -> Result<()> {
    let strength = PasswordStrength::evaluate(&args.candidate);

    if ctx.output.is_json() {
        ctx.output.json(&StrengthReport {
            score: strength.score(),
            label: strength.label().display_name(),
            ratio: strength.fill_ratio(),
            unmet: strength.unmet().iter().map(PasswordRule::message).collect(),
        });
        return Ok(());
    }

    ctx.output.header("Password Strength");
    ctx.output.kv(
        "strength",
        &format!(
            "{} {}",
            strength_meter(strength.label(), strength.fill_ratio(), 20),
            strength.label().display_name()
        ),
    );

    for rule in PasswordRule::ALL {
        if strength.is_satisfied(rule) {
            ctx.output.success(rule.label());
        } else {
            ctx.output.warn(rule.label());
        }
    }

    Ok(())
}
