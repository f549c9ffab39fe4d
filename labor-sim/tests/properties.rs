use approx::assert_relative_eq;
use labor_sim::hours::{self, HoursFoc, initial_guess, solve_hours_step};
use labor_solve::newton::{self, Config};
use proptest::prelude::*;

/// Parameters for one agent's first-order condition.
#[derive(Debug, Clone, Copy)]
struct Case {
    wage: f64,
    resources: f64,
    eta: f64,
    gamma: f64,
    beta: f64,
}

impl Case {
    fn foc(&self) -> HoursFoc {
        HoursFoc::new(self.wage, self.resources, self.eta, self.gamma, self.beta)
            .expect("generated parameters are valid")
    }

    fn solve(&self, iters: usize) -> newton::Solution {
        let config = Config {
            iters,
            ..Config::default()
        };
        hours::solve_hours(&self.foc(), initial_guess(self.wage, self.resources), &config)
            .expect("should solve")
    }
}

fn cases() -> impl Strategy<Value = Case> {
    (
        0.2..5.0_f64,
        -2.0..3.0_f64,
        -3.0..-0.2_f64,
        0.2..2.5_f64,
        0.2..5.0_f64,
    )
        .prop_filter("eta = -1 is singular", |(_, _, eta, _, _)| (eta + 1.0).abs() > 1e-3)
        .prop_map(|(wage, resources, eta, gamma, beta)| Case {
            wage,
            resources,
            eta,
            gamma,
            beta,
        })
}

proptest! {
    #[test]
    fn iterates_stay_in_domain(case in cases(), offset in 1e-3..10.0_f64) {
        let mut h = (-case.resources / case.wage).max(0.0) + offset;

        for _ in 0..30 {
            h = solve_hours_step(h, case.wage, case.resources, case.eta, case.gamma, case.beta)
                .expect("step from inside the domain should succeed");

            prop_assert!(h >= 0.0);
            prop_assert!(case.wage * h + case.resources > 0.0);
        }
    }

    #[test]
    fn solution_stays_in_domain_for_any_budget(case in cases(), iters in 0usize..40) {
        let solution = case.solve(iters);
        let foc = case.foc();

        prop_assert_eq!(solution.iters, iters);
        prop_assert!(solution.x >= 0.0);
        prop_assert!(foc.consumption(solution.x) > 0.0);
    }

    #[test]
    fn converged_root_is_a_fixed_point(case in cases()) {
        let solution = case.solve(100);
        prop_assume!(solution.status.is_converged());

        let next = solve_hours_step(
            solution.x,
            case.wage,
            case.resources,
            case.eta,
            case.gamma,
            case.beta,
        )
        .expect("should step");

        assert_relative_eq!(next, solution.x, max_relative = 1e-8, epsilon = 1e-12);
    }

    #[test]
    fn more_disutility_means_fewer_hours(case in cases(), scale in 1.01..4.0_f64) {
        let lower = case.solve(100);
        let higher = Case { beta: case.beta * scale, ..case }.solve(100);
        prop_assume!(lower.status.is_converged() && higher.status.is_converged());

        prop_assert!(
            higher.x <= lower.x * (1.0 + 1e-9) + 1e-12,
            "beta {} -> {}: hours {} -> {}",
            case.beta,
            case.beta * scale,
            lower.x,
            higher.x
        );
    }
}
