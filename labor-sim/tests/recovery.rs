//! The simulated data satisfy the first-order condition exactly, so among
//! participants `lw = -eta*log(c) + gamma*log(h) + log(beta) - log(rho)`
//! holds without error and least squares recovers the preference
//! parameters.

mod common;

use approx::assert_relative_eq;
use labor_sim::{Agent, CrossSection, Preferences, SimParams, TaxRegime, simulate_cross_section};

use common::least_squares;

fn reference_params(seed: u64) -> SimParams {
    SimParams {
        population: 1000,
        wage_return: 1.0,
        tax: TaxRegime { rho: 1.0, r: 0.0 },
        preferences: Preferences {
            eta: -1.5,
            gamma: 0.8,
            beta: 1.0,
            beta0: 0.1,
        },
        iterations: 30,
        seed,
        ..SimParams::default()
    }
}

fn regress<F>(section: &CrossSection, columns: F) -> Vec<f64>
where
    F: Fn(&Agent) -> Vec<f64>,
{
    let participants: Vec<&Agent> = section.participants().collect();
    let regressors: Vec<Vec<f64>> = participants.iter().map(|&agent| columns(agent)).collect();
    let response: Vec<f64> = participants.iter().map(|agent| agent.lw).collect();
    least_squares(&regressors, &response)
}

#[test]
fn recovers_preferences_from_participants() {
    for seed in [0, 1, 2] {
        let section = simulate_cross_section(&reference_params(seed)).expect("should simulate");
        assert!(section.participants().count() > 100);

        let coefs = regress(&section, |agent| {
            vec![1.0, agent.consumption.ln(), agent.hours.ln()]
        });

        assert_relative_eq!(coefs[0], 0.0, epsilon = 1e-6);
        assert_relative_eq!(coefs[1], 1.5, epsilon = 1e-6);
        assert_relative_eq!(coefs[2], 0.8, epsilon = 1e-6);
    }
}

#[test]
fn tax_multiplier_shifts_only_the_intercept() {
    let params = SimParams {
        tax: TaxRegime { rho: 0.7, r: 0.2 },
        ..reference_params(3)
    };
    let section = simulate_cross_section(&params).expect("should simulate");

    let coefs = regress(&section, |agent| {
        vec![1.0, agent.consumption.ln(), agent.hours.ln()]
    });

    assert_relative_eq!(coefs[0], -(0.7_f64.ln()), epsilon = 1e-6);
    assert_relative_eq!(coefs[1], 1.5, epsilon = 1e-6);
    assert_relative_eq!(coefs[2], 0.8, epsilon = 1e-6);
}

#[test]
fn heterogeneity_is_recovered_when_controlled_for() {
    let params = SimParams {
        heterogeneity: true,
        ..reference_params(4)
    };
    let section = simulate_cross_section(&params).expect("should simulate");

    let full = regress(&section, |agent| {
        vec![
            1.0,
            agent.consumption.ln(),
            agent.hours.ln(),
            agent.betai.ln(),
        ]
    });
    assert_relative_eq!(full[1], 1.5, epsilon = 1e-6);
    assert_relative_eq!(full[2], 0.8, epsilon = 1e-6);
    assert_relative_eq!(full[3], 1.0, epsilon = 1e-6);

    let omitted = regress(&section, |agent| {
        vec![1.0, agent.consumption.ln(), agent.hours.ln()]
    });
    assert!(
        (omitted[1] - 1.5).abs() > 0.05,
        "omitting log(betai) should bias the consumption coefficient, got {}",
        omitted[1]
    );
}
