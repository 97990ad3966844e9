use sleuth::{
    config::Config,
    procedures::synthesis::StatementOk,
    reports::Report,
    session::Session,
    structures::{dimension::Dimension, expression::Expression},
};

fn dimensions() -> Vec<Dimension> {
    vec![
        Dimension::new("suspect", ["Plum", "Mustard", "Peacock"]),
        Dimension::new("location", ["Kitchen", "Library", "Conservatory"]),
        Dimension::new("weapon", ["Knife", "Revolver", "Candlestick"]),
    ]
}

mod synthesis {
    use super::*;

    #[test]
    fn statements_are_true_and_within_budget() {
        for seed in 0..20 {
            let mut config = Config::default();
            config.statement_target.value = 20;
            config.synthesis.max_propositions.value = 1 + (seed as usize % 6);
            let mut session = Session::from_config(config, dimensions(), seed).unwrap();
            assert!(session.synthesize_pool().is_ok());

            for statement in session.statement_db.statements() {
                assert_eq!(statement.evaluate(session.hidden_world()), Ok(true), "{statement}");
                assert!(statement.proposition_count() <= session.config.synthesis.max_propositions.value);
            }
        }
    }

    #[test]
    fn statements_are_distinct() {
        let mut session = Session::from_config(Config::default(), dimensions(), 11).unwrap();
        assert!(session.synthesize_pool().is_ok());

        let mut canonical = session
            .statement_db
            .statements()
            .iter()
            .map(Expression::canonical)
            .collect::<Vec<_>>();
        let count = canonical.len();
        canonical.sort();
        canonical.dedup();
        assert_eq!(canonical.len(), count);
    }

    #[test]
    fn tiny_space_is_exhausted() {
        let mut config = Config::default();
        config.synthesis.max_propositions.value = 1;
        config.retry_limit.value = 100;
        let mut session = Session::from_config(config, vec![Dimension::unlabelled("A", 1)], 0).unwrap();

        assert_eq!(session.synthesize_pool(), Ok(Some(StatementOk::Exhausted)));
        assert_eq!(session.statement_db.len(), 1);
    }
}

mod rounds {
    use super::*;

    #[test]
    fn seeds_replay() {
        let mut first = Session::from_config(Config::default(), dimensions(), 3).unwrap();
        let mut second = Session::from_config(Config::default(), dimensions(), 3).unwrap();
        assert_eq!(first.hidden_index(), second.hidden_index());
        assert_eq!(first.run(), second.run());
        assert_eq!(first.statement_db.revealed(), second.statement_db.revealed());
    }

    #[test]
    fn runs_find_the_hidden_world() {
        for seed in 0..10 {
            let mut session = Session::from_config(Config::default(), dimensions(), seed).unwrap();
            let last = session.run().unwrap();

            assert_eq!(last.round, session.statement_db.revealed().len());
            match last.report {
                Report::Determined => {
                    assert!(!last.solutions.is_empty());
                    for solution in &last.solutions {
                        assert_eq!(solution.world, session.hidden_index());
                        assert!(solution.indices.contains(&(last.round - 1)));
                    }
                }
                Report::Undetermined => assert_eq!(session.statement_db.unrevealed_count(), 0),
                Report::BudgetExceeded => panic!("No budget was given"),
            }
        }
    }

    #[test]
    fn invalid_config() {
        let mut config = Config::default();
        config.synthesis.max_propositions.value = 0;
        assert!(Session::from_config(config, dimensions(), 0).is_err());
    }
}
