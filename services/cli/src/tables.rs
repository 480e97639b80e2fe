use clap::Args;
use grade_estimator::error::AppError;
use grade_estimator::estimation::tables::{rulebook, PolicyOutcome, Rulebook, ANY_CENTERING};
use grade_estimator::Authority;

#[derive(Args, Debug, Default)]
pub(crate) struct TablesArgs {
    /// Only print one authority (psa, bgs, sgc or cgc)
    #[arg(long, value_parser = crate::infra::parse_authority)]
    pub(crate) authority: Option<Authority>,
}

pub(crate) fn run_tables(args: TablesArgs) -> Result<(), AppError> {
    let authorities = match args.authority {
        Some(authority) => vec![authority],
        None => Authority::ALL.to_vec(),
    };

    for (position, authority) in authorities.into_iter().enumerate() {
        if position > 0 {
            println!();
        }
        for line in render_rulebook(rulebook(authority)) {
            println!("{line}");
        }
    }
    Ok(())
}

pub(crate) fn render_rulebook(book: &Rulebook) -> Vec<String> {
    let (low, high) = book.score_range();
    let mut lines = vec![format!("{} (scores {low} to {high})", book.authority)];

    lines.push(format!(
        "  {:>10}  {:<28}  {:>7}  {:>9}",
        "base >=", "label", "numeric", "centering"
    ));
    for tier in book.tiers {
        lines.push(format!(
            "  {:>10}  {:<28}  {:>7}  {:>9}",
            tier.min_grade,
            tier.label,
            tier.numeric,
            tolerance(tier.max_worst_ratio)
        ));
    }

    lines.push("  defect policy:".to_string());
    lines.push(policy_line("altered or handwriting", &book.altered));
    lines.push(policy_line("structural / bent corner", &book.structural_ceiling));
    lines.push(policy_line("crease", &book.crease_ceiling));
    lines
}

fn policy_line(name: &str, outcome: &PolicyOutcome) -> String {
    format!("    {name:<26} -> {} ({})", outcome.label, outcome.numeric)
}

fn tolerance(max_worst_ratio: f64) -> String {
    if max_worst_ratio >= ANY_CENTERING {
        "any".to_string()
    } else {
        format!("{}/{}", max_worst_ratio, 100.0 - max_worst_ratio)
    }
}
