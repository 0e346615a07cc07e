use venn_lib::{
    config::{Config, ConflictCheck},
    model::{Model, ModelState},
    parse::parse,
    reports::Verdict,
    structures::{
        statement::Statement,
        term::{Quantifier, Term},
    },
    types::err::{self, ErrorKind},
    view::DiagramView,
};

mod state {

    use super::*;

    #[test]
    fn evaluate_before_build() {
        let mut model = Model::default();
        assert!(model.read_premises("Some A's are B's").is_ok());
        assert_eq!(
            model.evaluate_str("Some A's are B's").err(),
            Some(ErrorKind::State(err::StateError::NotBuilt))
        );
    }

    #[test]
    fn add_after_build() {
        let mut model = Model::from_premises(Config::default(), "Some A's are B's").unwrap();
        assert_eq!(model.state(), ModelState::Built);

        assert_eq!(
            model.read_premises("C"),
            Err(ErrorKind::State(err::StateError::AlreadyBuilt))
        );
        assert_eq!(
            model.build_constraints(),
            Err(ErrorKind::State(err::StateError::AlreadyBuilt))
        );
        assert_eq!(model.category_count(), 2);
    }

    #[test]
    fn too_few_categories() {
        let mut model = Model::default();
        assert!(model.read_premises("A").is_ok());
        assert_eq!(
            model.build_constraints(),
            Err(ErrorKind::Arity(err::ArityError::TooFew(1)))
        );
        assert_eq!(model.state(), ModelState::Accumulating);

        assert!(model.read_premises("B").is_ok());
        assert!(model.build_constraints().is_ok());
        assert_eq!(model.regions().map(|r| r.len()), Some(3));
    }

    #[test]
    fn failed_line() {
        let mut model = Model::default();
        let result = model.read_premises("A\nB\nSome A's are\nSome A's are B's");

        assert!(matches!(
            result,
            Err(ErrorKind::Grammar(err::GrammarError::MissingTerm(_)))
        ));
        assert_eq!(model.category_count(), 2);
        assert!(model.statements().is_empty());
    }

    #[test]
    fn blank_lines_and_duplicates() {
        let mut model = Model::default();
        assert_eq!(
            model.read_premises("\n  \nSome A's are B's;;some a are b\n"),
            Ok(2)
        );
        assert_eq!(model.statements().len(), 1);

        assert_eq!(model.add_statement(parse("Some B's are A's").unwrap()), Ok(true));
        assert_eq!(model.add_statement(parse("Some B's are A's").unwrap()), Ok(false));
        assert!(model.contains_statement(&parse("some b's are a's").unwrap()));
    }

    #[test]
    fn malformed_statements() {
        use err::GrammarError as GE;

        let all = |category: &str| Term::quantified(Quantifier::All, category);
        let mut model = Model::default();

        let unquantified = Statement::new(Term::bare("A"), Term::bare("B"));
        assert!(matches!(
            model.add_statement(unquantified),
            Err(ErrorKind::Grammar(GE::UnquantifiedSubject(_)))
        ));

        let quantified = Statement::new(all("A"), Term::quantified(Quantifier::Some, "B"));
        assert!(matches!(
            model.add_statement(quantified),
            Err(ErrorKind::Grammar(GE::QuantifiedPredicate(_)))
        ));

        let negated = Statement::new(all("A").negate(), Term::bare("B"));
        assert!(matches!(
            model.add_statement(negated),
            Err(ErrorKind::Grammar(GE::NegatedSubject(_)))
        ));

        let reflexive = Statement::new(all("A"), Term::bare("A").negate());
        assert_eq!(
            model.add_statement(reflexive),
            Err(ErrorKind::Grammar(GE::SelfReference("A".to_string())))
        );

        assert!(model.is_empty());

        assert!(model.read_premises("A
B").is_ok());
        assert!(model.build_constraints().is_ok());
        assert!(model.forced_empty().is_empty());
        assert!(model.witness_groups().is_empty());
    }

    #[test]
    fn display() {
        let model =
            Model::from_premises(Config::default(), "C\nSome A's are B's\nAll A's are not C's")
                .unwrap();
        let text = model.to_string();

        assert!(text.contains("A {<Some A's are B's>, <All A's are not C's>}"));
        assert!(text.contains("B {<Some A's are B's>}"));
        assert!(text.contains("C {<All A's are not C's>}"));
    }
}

mod conflicts {

    use super::*;

    const PREMISES: &str = "Some A's are B's; All A's are not B's";

    fn config(conflict_check: ConflictCheck) -> Config {
        Config {
            conflict_check,
            ..Config::default()
        }
    }

    #[test]
    fn eager() {
        let mut model = Model::from_config(config(ConflictCheck::Eager));
        assert!(model.read_premises(PREMISES).is_ok());

        let expected = err::ConflictError {
            witness: "Some A's are B's".to_string(),
            exclusions: vec!["All A's are not B's".to_string()],
        };
        assert_eq!(
            model.build_constraints(),
            Err(ErrorKind::Conflict(expected.clone()))
        );
        assert_eq!(
            expected.to_string(),
            "conflicts between [Some A's are B's] and [All A's are not B's]"
        );
        assert_eq!(model.state(), ModelState::Accumulating);
        assert!(model.forced_empty().is_empty());
        assert_eq!(model.conflicts().len(), 1);
    }

    #[test]
    fn deferred() {
        let model = Model::from_premises(config(ConflictCheck::Deferred), PREMISES).unwrap();
        assert!(matches!(
            model.evaluate_str("Some B's are A's"),
            Err(ErrorKind::Conflict(_))
        ));
    }

    #[test]
    fn off() {
        let model = Model::from_premises(config(ConflictCheck::Off), PREMISES).unwrap();
        assert_eq!(model.conflicts().len(), 1);

        let evaluation = model.evaluate_str("Some A's are B's").unwrap();
        assert_eq!(evaluation.verdict, Verdict::NoTrueWitness);
    }

    #[test]
    fn several_exclusions() {
        let premises = "Some A's are B's\nAll A's are not C's\nAll B's are C's";
        let mut model = Model::from_config(Config::default());
        assert!(model.read_premises(premises).is_ok());

        match model.build_constraints() {
            Err(ErrorKind::Conflict(conflict)) => {
                assert_eq!(conflict.witness, "Some A's are B's");
                assert_eq!(conflict.exclusions.len(), 2);
            }
            other => panic!("Expected a conflict, found {other:?}"),
        }
    }

    #[test]
    fn partial_exclusion() {
        let premises = "Some A's are B's\nAll A's are not C's";
        let model = Model::from_premises(Config::default(), premises).unwrap();
        assert!(model.conflicts().is_empty());
    }
}

mod view {

    use super::*;

    #[test]
    fn darii_view() {
        let model =
            Model::from_premises(Config::default(), "All A's are B's\nSome C's are A's").unwrap();
        let mut view = DiagramView::from_model(&model);

        assert_eq!(view.categories, vec!["A", "B", "C"]);
        assert_eq!(view.regions.len(), 7);
        assert_eq!(view.regions.get("AC").map(String::as_str), Some("101"));

        let forced = view.forced_empty.keys().cloned().collect::<Vec<_>>();
        assert_eq!(forced, vec!["A", "AC"]);
        assert_eq!(
            view.forced_empty.get("A"),
            Some(&vec!["All A's are B's".to_string()])
        );

        assert_eq!(view.witness_groups.len(), 1);
        assert_eq!(view.witness_groups[0].regions, vec!["ABC", "AC"]);
        assert_eq!(view.witness_groups[0].statements, vec!["Some C's are A's"]);

        let evaluation = model.evaluate_str("Some C's are B's").unwrap();
        view.push_evaluation(&model, &evaluation);

        let evaluation_view = &view.evaluations[0];
        assert_eq!(evaluation_view.verdict, "TRUE");
        assert!(evaluation_view.valid);
        assert_eq!(evaluation_view.color, "green");
        assert_eq!(evaluation_view.pattern, "///");
        assert_eq!(evaluation_view.marked, vec!["ABC", "BC"]);

        let json = serde_json::to_string(&view).unwrap();
        assert!(json.contains("\"forced_empty\""));
        assert!(json.contains("\"marked\":[\"ABC\",\"BC\"]"));
    }

    #[test]
    fn unbuilt_view() {
        let mut model = Model::default();
        assert!(model.read_premises("B\nA").is_ok());
        let view = DiagramView::from_model(&model);

        assert_eq!(view.categories, vec!["A", "B"]);
        assert!(view.regions.is_empty());

        let json = serde_json::to_string(&view).unwrap();
        assert!(!json.contains("evaluations"));
    }
}
