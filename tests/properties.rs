use rand::{rngs::StdRng, Rng, SeedableRng};

use venn_lib::{
    config::{Config, ConflictCheck},
    model::Model,
    parse::parse,
    reports::Verdict,
    structures::{
        region::RegionMap,
        statement::Statement,
        term::{Quantifier, Term},
    },
};

const CATEGORIES: [&str; 3] = ["A", "B", "C"];

fn random_statement(rng: &mut StdRng, quantifier: Quantifier) -> Statement {
    let subject = rng.gen_range(0..CATEGORIES.len());
    let predicate = (subject + rng.gen_range(1..CATEGORIES.len())) % CATEGORIES.len();

    let mut rhs = Term::bare(CATEGORIES[predicate]);
    if rng.gen_bool(0.5) {
        rhs = rhs.negate();
    }

    Statement::new(Term::quantified(quantifier, CATEGORIES[subject]), rhs)
}

fn random_quantifier(rng: &mut StdRng) -> Quantifier {
    match rng.gen_bool(0.5) {
        true => Quantifier::Some,
        false => Quantifier::All,
    }
}

/// A built model over A, B, and C from `statements`, ignoring conflicts.
fn model_of(statements: &[Statement]) -> Model {
    let config = Config {
        conflict_check: ConflictCheck::Off,
        ..Config::default()
    };
    let mut model = Model::from_config(config);
    for category in CATEGORIES {
        assert!(model.declare_category(category).is_ok());
    }
    for statement in statements {
        assert!(model.add_statement(statement.clone()).is_ok());
    }
    assert!(model.build_constraints().is_ok());
    model
}

mod properties {

    use super::*;

    #[test]
    fn parsing_is_idempotent() {
        for clause in [
            "Some A's are B's",
            "All A's are not B's",
            "some \"big dogs\" IS not cats",
        ] {
            let first = parse(clause).unwrap();
            let second = parse(clause).unwrap();
            assert_eq!(first, second);
            assert_eq!(first.to_string(), second.to_string());
        }
    }

    #[test]
    fn region_count() {
        for names in [vec!["A", "B"], vec!["A", "B", "C"]] {
            let map = RegionMap::new(&names).unwrap();
            let expected = 2_usize.pow(names.len() as u32) - 1;
            assert_eq!(map.regions().len(), expected);
            assert_eq!(map.label_map().len(), expected);
        }
    }

    #[test]
    fn monotone_exclusions() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..64 {
            let mut statements: Vec<Statement> = Vec::default();
            let mut previous = model_of(&statements);

            for _ in 0..6 {
                statements.push(random_statement(&mut rng, Quantifier::All));
                let next = model_of(&statements);

                for region in previous.forced_empty().keys() {
                    assert!(next.forced_empty().contains_key(region));
                }
                previous = next;
            }
        }
    }

    #[test]
    fn monotone_witnesses() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..64 {
            let mut statements: Vec<Statement> = Vec::default();
            let mut previous = model_of(&statements);

            for _ in 0..6 {
                let quantifier = random_quantifier(&mut rng);
                statements.push(random_statement(&mut rng, quantifier));
                let next = model_of(&statements);

                for group in previous.witness_groups().keys() {
                    assert!(next.witness_groups().contains_key(group));
                }
                for region in previous.forced_empty().keys() {
                    assert!(next.forced_empty().contains_key(region));
                }
                previous = next;
            }
        }
    }

    #[test]
    fn premises_are_not_refuted() {
        let mut rng = StdRng::seed_from_u64(13);

        for _ in 0..128 {
            let statements = (0..4)
                .map(|_| {
                    let quantifier = random_quantifier(&mut rng);
                    random_statement(&mut rng, quantifier)
                })
                .collect::<Vec<_>>();

            let model = model_of(&statements);
            if !model.conflicts().is_empty() {
                continue;
            }

            for statement in &statements {
                let evaluation = model.evaluate(statement).unwrap();
                match statement.quantifier() {
                    Quantifier::Some => assert_eq!(evaluation.verdict, Verdict::True),
                    _ => assert_ne!(evaluation.verdict, Verdict::False, "{statement}"),
                }
            }
        }
    }

    #[test]
    fn sound_exclusions() {
        let mut rng = StdRng::seed_from_u64(17);

        for _ in 0..128 {
            let statements = (0..5)
                .map(|_| {
                    let quantifier = random_quantifier(&mut rng);
                    random_statement(&mut rng, quantifier)
                })
                .collect::<Vec<_>>();

            let mut model = Model::from_config(Config::default());
            for category in CATEGORIES {
                assert!(model.declare_category(category).is_ok());
            }
            for statement in &statements {
                assert!(model.add_statement(statement.clone()).is_ok());
            }

            if model.build_constraints().is_err() {
                assert!(!model.conflicts().is_empty());
                continue;
            }

            for group in model.witness_groups().keys() {
                assert!(group.iter().any(|region| !model.is_forced_empty(region)));
            }
        }
    }
}
