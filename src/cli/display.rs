use crossterm::style::{Color, Stylize};

use venn_lib::{
    model::Model,
    reports::{Evaluation, Verdict},
};

const YELLOW_GREEN: Color = Color::Rgb {
    r: 154,
    g: 205,
    b: 50,
};

const DARK_ORANGE: Color = Color::Rgb {
    r: 255,
    g: 140,
    b: 0,
};

/// The colour of a verdict, by whether the statement could be true and whether the verdict is certain.
fn verdict_color(verdict: Verdict) -> Color {
    let details = verdict.details();
    match (details.validity, details.must_hold) {
        (true, true) => Color::Green,
        (true, false) => YELLOW_GREEN,
        (false, true) => Color::Red,
        (false, false) => DARK_ORANGE,
    }
}

pub fn failure(message: &str) {
    eprintln!("{}", message.with(Color::Red));
}

/// Writes the categories, regions, and constraints of a built model.
pub fn model_summary(model: &Model) {
    let Some(regions) = model.regions() else {
        return;
    };

    println!("c Sets: {}", regions.categories().join(", "));

    let labels = regions
        .regions()
        .into_iter()
        .map(|region| format!("{} {}", regions.id(region), regions.label(region)))
        .collect::<Vec<_>>();
    println!("c Regions: {}", labels.join(", "));

    for (region, statements) in model.forced_empty() {
        for statement in statements {
            println!("c Empty: {} by [{}]", regions.id(*region), statement.text());
        }
    }

    for (group, statements) in model.witness_groups() {
        let ids = group
            .iter()
            .map(|region| regions.id(*region))
            .collect::<Vec<_>>();
        for statement in statements {
            println!("c Witness: ({}) by [{}]", ids.join(", "), statement.text());
        }
    }

    for conflict in model.conflicts() {
        println!("c {}", conflict.to_string().with(DARK_ORANGE));
    }
}

/// Writes an evaluation, coloured by verdict.
pub fn evaluation(model: &Model, evaluation: &Evaluation) {
    let color = verdict_color(evaluation.verdict);

    println!(
        "{}: {}",
        evaluation.statement.text(),
        evaluation.verdict.to_string().with(color).bold()
    );
    println!("  {}", evaluation.reason.as_str().with(color));

    if let Some(regions) = model.regions() {
        if !evaluation.marked.is_empty() {
            let ids = evaluation
                .marked
                .iter()
                .map(|region| regions.id(*region))
                .collect::<Vec<_>>();
            println!(
                "  Marked ({} {}): {}",
                evaluation.color(),
                evaluation.pattern(),
                ids.join(", ")
            );
        }
    }
}
