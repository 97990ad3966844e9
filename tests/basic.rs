use sleuth::{
    db::world_space::WorldSpace,
    structures::{dimension::Dimension, expression::Expression, proposition::Proposition},
};

fn three_by_three() -> WorldSpace {
    WorldSpace::build(vec![
        Dimension::unlabelled("A", 3),
        Dimension::unlabelled("B", 3),
        Dimension::unlabelled("C", 3),
    ])
    .unwrap()
}

fn p(dimension: u32, alternative: u32) -> Expression {
    Expression::literal(Proposition::new(dimension, alternative), true)
}

mod world_space {
    use sleuth::structures::valuation::Valuation;

    use super::*;

    #[test]
    fn twenty_seven_worlds() {
        assert_eq!(three_by_three().len(), 27);
    }

    #[test]
    fn one_true_per_dimension() {
        let space = three_by_three();
        for world in space.worlds() {
            for dimension in 0..3 {
                let true_count = (0..3)
                    .filter(|alternative| world.value_of(Proposition::new(dimension, *alternative)) == Some(true))
                    .count();
                assert_eq!(true_count, 1);
            }
        }
    }

    #[test]
    fn labels_describe_worlds() {
        let space = WorldSpace::build(vec![
            Dimension::new("suspect", ["Plum", "Mustard"]),
            Dimension::new("weapon", ["Knife", "Revolver", "Candlestick"]),
        ])
        .unwrap();
        assert_eq!(space.len(), 6);

        let (_, world) = space.find(&[1, 2]).unwrap();
        assert_eq!(world.to_string(), "A2 B3");
        assert_eq!(
            space.describe(world).collect::<Vec<_>>(),
            vec![("suspect", "Mustard"), ("weapon", "Candlestick")]
        );
    }
}

mod evaluation {
    use sleuth::procedures::evaluate::evaluate;

    use super::*;

    #[test]
    fn implication_matches_definition() {
        let space = three_by_three();
        let atoms = [p(0, 0), p(1, 1), Expression::not(p(2, 2)), Expression::or(p(0, 1), p(1, 2))];
        for world in space.worlds() {
            for a in &atoms {
                for b in &atoms {
                    let implication = Expression::implies(a.clone(), b.clone());
                    let definition = !evaluate(a, world).unwrap() || evaluate(b, world).unwrap();
                    assert_eq!(evaluate(&implication, world), Ok(definition));
                }
            }
        }
    }

    #[test]
    fn a1_and_b2_leaves_three_worlds() {
        let space = three_by_three();
        let (_, hidden) = space.find(&[0, 1, 2]).unwrap();
        let statement = Expression::and(p(0, 0), p(1, 1));

        assert_eq!(statement.evaluate(hidden), Ok(true));
        assert_eq!(space.consistent_worlds([&statement]).unwrap().len(), 3);
    }

    #[test]
    fn referentially_transparent() {
        let space = three_by_three();
        let statement = Expression::implies(Expression::or(p(0, 0), p(1, 2)), Expression::not(p(2, 1)));
        for world in space.worlds() {
            assert_eq!(statement.evaluate(world), statement.evaluate(world));
        }
    }
}
