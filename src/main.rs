#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use clap::Parser;

use venn_lib::{model::Model, view::DiagramView};

mod cli;

use cli::{display, Args};

fn main() {
    let args = Args::parse();

    #[cfg(feature = "log")]
    cli::logging::init(args.log_level);

    let premises = match args.premises_text() {
        Ok(text) => text,
        Err(e) => {
            display::failure(&e);
            std::process::exit(1);
        }
    };

    if premises.trim().is_empty() {
        display::failure("The diagram is empty!");
        std::process::exit(1);
    }

    let mut model = Model::from_config(args.config());

    if let Err(e) = model.read_premises(&premises) {
        display::failure(&e.to_string());
        std::process::exit(1);
    }

    if let Err(e) = model.build_constraints() {
        display::failure(&e.to_string());
        std::process::exit(1);
    }

    let mut view = DiagramView::from_model(&model);
    let mut all_valid = true;

    if !args.json {
        display::model_summary(&model);
    }

    for conclusion in &args.conclusions {
        match model.evaluate_str(conclusion) {
            Ok(evaluation) => {
                all_valid &= evaluation.is_valid();
                match args.json {
                    true => view.push_evaluation(&model, &evaluation),
                    false => display::evaluation(&model, &evaluation),
                }
            }

            Err(e) => {
                all_valid = false;
                display::failure(&format!("{conclusion}: {e}"));
            }
        }
    }

    if args.json {
        match serde_json::to_string_pretty(&view) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                display::failure(&e.to_string());
                std::process::exit(1);
            }
        }
    }

    match all_valid {
        true => std::process::exit(0),
        false => std::process::exit(10),
    }
}
