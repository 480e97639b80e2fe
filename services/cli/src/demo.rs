use clap::Args;
use grade_estimator::error::AppError;
use grade_estimator::{
    CenteringMeasurements, CenteringSplit, EstimateBundle, EstimationEngine, GradingInput,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Include the explanatory notes for every estimate
    #[arg(long)]
    pub(crate) show_notes: bool,
}

pub(crate) struct DemoCard {
    pub(crate) name: &'static str,
    pub(crate) input: GradingInput,
}

fn centering(lr: (f64, f64), tb: (f64, f64)) -> CenteringMeasurements {
    CenteringMeasurements::front(CenteringSplit(lr.0, lr.1), CenteringSplit(tb.0, tb.1))
}

pub(crate) fn demo_cards() -> Vec<DemoCard> {
    let mut creased =
        GradingInput::new(9.5).with_centering(centering((52.0, 48.0), (50.0, 50.0)));
    creased.crease_detected = true;

    let mut signed = GradingInput::new(8.5);
    signed.has_handwriting = true;

    let mut worn_corners =
        GradingInput::new(9.0).with_centering(centering((53.0, 47.0), (52.0, 48.0)));
    worn_corners.corners_score = Some(7.5);

    vec![
        DemoCard {
            name: "Pack-fresh gem",
            input: GradingInput::new(10.0).with_centering(centering((50.0, 50.0), (51.0, 49.0))),
        },
        DemoCard {
            name: "Off-center mint",
            input: GradingInput::new(9.5).with_centering(centering((63.0, 37.0), (52.0, 48.0))),
        },
        DemoCard {
            name: "Between increments",
            input: GradingInput::new(8.7).with_centering(centering((55.0, 45.0), (54.0, 46.0))),
        },
        DemoCard {
            name: "Soft corners",
            input: worn_corners,
        },
        DemoCard {
            name: "Light crease",
            input: creased,
        },
        DemoCard {
            name: "Signed by previous owner",
            input: signed,
        },
        DemoCard {
            name: "No centering captured",
            input: GradingInput::new(6.0),
        },
    ]
}

pub(crate) fn run_demo(engine: &EstimationEngine, args: DemoArgs) -> Result<(), AppError> {
    println!("Professional grade estimation demo");
    for card in demo_cards() {
        let bundle = engine.estimate(&card.input);
        println!("\n{} (internal grade {})", card.name, card.input.final_grade);
        for line in render_bundle(&bundle, args.show_notes) {
            println!("{line}");
        }
    }
    Ok(())
}

pub(crate) fn render_bundle(bundle: &EstimateBundle, show_notes: bool) -> Vec<String> {
    let mut lines = Vec::new();
    for (authority, estimate) in bundle.iter() {
        lines.push(format!(
            "- {authority}: {} | score {} | {} confidence",
            estimate.estimated_grade,
            estimate.numeric_score,
            estimate.confidence.as_str()
        ));
        if show_notes {
            lines.push(format!("    {}", estimate.notes));
        }
    }
    lines
}
