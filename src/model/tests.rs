use super::*;
use assert_float_eq::*;

fn create_test_predictor() -> Predictor {
    Predictor::try_from(Config::default()).unwrap()
}

fn odds_request(odds: OddsTriple) -> MatchRequest<'static> {
    MatchRequest {
        home_team: "Barcelona",
        away_team: "Club Brugge",
        odds: Some(odds),
        ratings: None,
        form: None,
    }
}

#[test]
fn favourite_called_at_market_prices() {
    let predictor = create_test_predictor();
    let prediction = predictor
        .predict(&odds_request(OddsTriple::new(1.57, 3.90, 5.19)))
        .unwrap();

    assert_eq!(crate::domain::Winner::Home, prediction.winner);
    assert!(
        prediction.probs.home > 0.5,
        "calibrated home prob {} not a majority",
        prediction.probs.home
    );
    assert_float_absolute_eq!(1.0, prediction.probs.sum(), 1e-9);

    // rates follow the odds-ratio formula off the renormalised implied probabilities
    let market = Market::fit(OddsTriple::new(1.57, 3.90, 5.19)).unwrap();
    let expected = rates::from_market(&market);
    assert_float_relative_eq!(expected.home, prediction.expected_goals.home, 1e-9);
    assert_float_relative_eq!(expected.away, prediction.expected_goals.away, 1e-9);
}

#[test]
fn home_prior_persists_at_even_odds() {
    let predictor = create_test_predictor();
    let prediction = predictor
        .predict(&odds_request(OddsTriple::new(3.0, 3.0, 3.0)))
        .unwrap();

    // an even book reduces the rates to the 1.5/1.0 baselines
    assert_float_relative_eq!(1.5, prediction.expected_goals.home, 1e-9);
    assert_float_relative_eq!(1.0, prediction.expected_goals.away, 1e-9);

    let poisson = ScoreGrid::from_poisson(&prediction.expected_goals, MAX_GOALS).outcomes();
    assert!(poisson.home > poisson.draw);
    assert!(poisson.draw > 0.0);
    assert!(poisson.home > poisson.away);

    assert_eq!(crate::domain::Winner::Home, prediction.winner);
    assert_float_absolute_eq!(1.0, prediction.probs.sum(), 1e-9);
}

#[test]
fn unblended_rating_mode_normalises() {
    let predictor = create_test_predictor();
    let prediction = predictor
        .predict(&MatchRequest {
            home_team: "Arsenal",
            away_team: "Chelsea",
            odds: None,
            ratings: Some(RatingPair::new(1900.0, 1700.0)),
            form: None,
        })
        .unwrap();

    assert_float_absolute_eq!(1.0, prediction.probs.sum(), 1e-9);
    assert_eq!(None, prediction.odds);
    assert!(prediction.probs.home > prediction.probs.away);
    let expected = rates::from_ratings(&RatingPair::new(1900.0, 1700.0));
    assert_float_relative_eq!(expected.home, prediction.expected_goals.home, 1e-9);
}

#[test]
fn odds_take_precedence_over_ratings() {
    let predictor = create_test_predictor();
    let request = MatchRequest {
        ratings: Some(RatingPair::new(1000.0, 2000.0)),
        ..odds_request(OddsTriple::new(3.0, 3.0, 3.0))
    };
    let prediction = predictor.predict(&request).unwrap();
    assert_float_relative_eq!(1.5, prediction.expected_goals.home, 1e-9);
}

#[test]
fn form_shifts_the_forecast() {
    let predictor = create_test_predictor();
    let guide = FormGuide::from([
        ("Barcelona", vec![1.2, 1.1, 1.3]),
        ("Club Brugge", vec![0.9, 1.0, 0.8]),
    ]);
    let without = predictor
        .predict(&odds_request(OddsTriple::new(1.57, 3.90, 5.19)))
        .unwrap();
    let with = predictor
        .predict(&MatchRequest {
            form: Some(&guide),
            ..odds_request(OddsTriple::new(1.57, 3.90, 5.19))
        })
        .unwrap();

    assert!(with.expected_goals.home > without.expected_goals.home);
    assert!(with.expected_goals.away < without.expected_goals.away);
    assert!(with.probs.home > without.probs.home);
    assert_float_absolute_eq!(1.0, with.probs.sum(), 1e-9);
}

#[test]
fn empty_form_samples_leave_forecast_unchanged() {
    let predictor = create_test_predictor();
    let guide = FormGuide::from([("Barcelona", vec![]), ("Club Brugge", vec![])]);
    let without = predictor
        .predict(&odds_request(OddsTriple::new(1.57, 3.90, 5.19)))
        .unwrap();
    let with = predictor
        .predict(&MatchRequest {
            form: Some(&guide),
            ..odds_request(OddsTriple::new(1.57, 3.90, 5.19))
        })
        .unwrap();
    assert_eq!(without.probs, with.probs);
    assert_eq!(without.expected_goals, with.expected_goals);
}

#[test]
fn identical_inputs_forecast_identically() {
    let predictor = create_test_predictor();
    let request = odds_request(OddsTriple::new(2.10, 3.40, 3.60));
    let first = predictor.predict(&request).unwrap();
    let second = predictor.predict(&request).unwrap();
    assert_eq!(first.probs, second.probs);
    assert_eq!(first.expected_goals, second.expected_goals);
    assert_eq!(first.winner, second.winner);
}

#[test]
fn missing_signal_rejected() {
    let predictor = create_test_predictor();
    let result = predictor.predict(&MatchRequest {
        home_team: "Barcelona",
        away_team: "Club Brugge",
        odds: None,
        ratings: None,
        form: None,
    });
    assert!(matches!(result, Err(InvalidInput::MissingStrengthSignal)));
}

#[test]
fn malformed_odds_rejected() {
    let predictor = create_test_predictor();
    assert!(matches!(
        predictor.predict(&odds_request(OddsTriple::new(-1.57, 3.90, 5.19))),
        Err(InvalidInput::Odds(_))
    ));
    assert!(matches!(
        predictor.predict(&odds_request(OddsTriple::new(1.57, f64::NAN, 5.19))),
        Err(InvalidInput::Odds(_))
    ));
}

#[test]
fn non_finite_rating_rejected() {
    let predictor = create_test_predictor();
    let result = predictor.predict(&MatchRequest {
        home_team: "Arsenal",
        away_team: "Chelsea",
        odds: None,
        ratings: Some(RatingPair::new(f64::NAN, 1700.0)),
        form: None,
    });
    assert!(matches!(
        result,
        Err(InvalidInput::NonFiniteRating { .. })
    ));
}

#[test]
fn lopsided_odds_fall_back_to_the_market_anchor() {
    // the implied ratio blows the home rate past the point where every grid cell
    // underflows; the blend leaves only the market term standing
    let predictor = create_test_predictor();
    let odds = OddsTriple::new(1.000001, 1000.0, 100_000_000.0);
    let prediction = predictor.predict(&odds_request(odds)).unwrap();

    assert!(prediction.expected_goals.is_degenerate());
    assert_float_absolute_eq!(1.0, prediction.probs.sum(), 1e-9);
    assert_eq!(crate::domain::Winner::Home, prediction.winner);
    let market = Market::fit(odds).unwrap();
    assert_float_relative_eq!(market.probs[0], prediction.probs.home, 1e-9);
}

#[test]
fn vanished_mass_without_anchor_rejected() {
    let predictor = Predictor::try_from(Config {
        blend: BlendWeights {
            model: 1.0,
            market: 0.0,
        },
        ..Config::default()
    })
    .unwrap();
    let result = predictor.predict(&odds_request(OddsTriple::new(1.000001, 1000.0, 100_000_000.0)));
    assert!(matches!(result, Err(InvalidInput::VanishedMass { .. })));
}

#[test]
fn extreme_rating_mismatch_stays_bounded() {
    let predictor = create_test_predictor();
    let prediction = predictor
        .predict(&MatchRequest {
            home_team: "Arsenal",
            away_team: "Chelsea",
            odds: None,
            ratings: Some(RatingPair::new(12000.0, 2000.0)),
            form: None,
        })
        .unwrap();

    // the logistic caps the home rate below the average-goals constant even here
    assert!(prediction.expected_goals.home < rates::AVG_TOTAL_GOALS);
    assert!(prediction.expected_goals.is_degenerate());
    assert_float_absolute_eq!(1.0, prediction.probs.sum(), 1e-9);
    assert_eq!(crate::domain::Winner::Home, prediction.winner);
}

#[test]
fn config_validation() {
    assert!(matches!(
        Predictor::try_from(Config {
            max_goals: 0,
            ..Config::default()
        }),
        Err(InvalidConfig::ZeroMaxGoals)
    ));
    assert!(matches!(
        Predictor::try_from(Config {
            blend: BlendWeights {
                model: 0.7,
                market: 0.4
            },
            ..Config::default()
        }),
        Err(InvalidConfig::MalformedBlend { .. })
    ));
    assert!(matches!(
        Predictor::try_from(Config {
            form_damping: 1.5,
            ..Config::default()
        }),
        Err(InvalidConfig::MalformedDamping(_))
    ));
    assert!(Predictor::try_from(Config::default()).is_ok());
}

#[test]
fn custom_blend_disables_market_anchor() {
    let predictor = Predictor::try_from(Config {
        blend: BlendWeights {
            model: 1.0,
            market: 0.0,
        },
        ..Config::default()
    })
    .unwrap();
    let prediction = predictor
        .predict(&odds_request(OddsTriple::new(1.57, 3.90, 5.19)))
        .unwrap();

    let mut poisson = ScoreGrid::from_poisson(&prediction.expected_goals, MAX_GOALS).outcomes();
    poisson.normalise();
    assert_float_relative_eq!(poisson.home, prediction.probs.home, 1e-9);
    assert_float_relative_eq!(poisson.draw, prediction.probs.draw, 1e-9);
    assert_float_relative_eq!(poisson.away, prediction.probs.away, 1e-9);
}
