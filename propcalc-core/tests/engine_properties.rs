//! Property tests for the derived-value engine.
//!
//! 1. Loss limits and target profit are linear in account size and percentage
//! 2. Firm cut + trader payout always equals target profit
//! 3. Health stays within [0, 100] for non-negative targets, 100 at zero drawdown
//! 4. Position size is zero without a positive per-unit risk, and otherwise
//!    reconstructs the dollar risk

use proptest::prelude::*;
use propcalc_core::domain::{Category, InstrumentPreset, PositionInputs, ProfitSplit, RiskInputs};
use propcalc_core::engine::{compute_position, compute_risk, Memo};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_account() -> impl Strategy<Value = f64> {
    (1_000.0..2_000_000.0_f64).prop_map(|a| a.round())
}

fn arb_pct() -> impl Strategy<Value = f64> {
    (0.0..100.0_f64).prop_map(|p| (p * 100.0).round() / 100.0)
}

fn arb_split() -> impl Strategy<Value = ProfitSplit> {
    prop_oneof![Just(ProfitSplit::Eighty), Just(ProfitSplit::Ninety)]
}

fn arb_risk_inputs() -> impl Strategy<Value = RiskInputs> {
    (arb_account(), arb_pct(), arb_pct(), arb_pct(), arb_split()).prop_map(
        |(account_size, daily, max, target, split)| RiskInputs {
            account_size,
            daily_drawdown_pct: daily,
            max_drawdown_pct: max,
            profit_target_pct: target,
            profit_split: split,
        },
    )
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

fn preset(tick_value: f64) -> InstrumentPreset {
    InstrumentPreset::new("TEST", Category::Futures, 0.25, tick_value, "tick")
}

// ── 1. Linearity ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn doubling_account_doubles_limits(inputs in arb_risk_inputs()) {
        let base = compute_risk(&inputs);
        let doubled = compute_risk(&RiskInputs {
            account_size: inputs.account_size * 2.0,
            ..inputs
        });

        prop_assert!(close(doubled.daily_loss_limit, base.daily_loss_limit * 2.0));
        prop_assert!(close(doubled.max_loss_limit, base.max_loss_limit * 2.0));
        prop_assert!(close(doubled.target_profit, base.target_profit * 2.0));
    }

    #[test]
    fn limits_scale_with_percentage(inputs in arb_risk_inputs(), k in 0.0..5.0_f64) {
        let base = compute_risk(&inputs);
        let scaled = compute_risk(&RiskInputs {
            daily_drawdown_pct: inputs.daily_drawdown_pct * k,
            max_drawdown_pct: inputs.max_drawdown_pct * k,
            profit_target_pct: inputs.profit_target_pct * k,
            ..inputs
        });

        prop_assert!(close(scaled.daily_loss_limit, base.daily_loss_limit * k));
        prop_assert!(close(scaled.max_loss_limit, base.max_loss_limit * k));
        prop_assert!(close(scaled.target_profit, base.target_profit * k));
    }
}

// ── 2. Split conservation ────────────────────────────────────────────

proptest! {
    #[test]
    fn split_conserves_target_profit(inputs in arb_risk_inputs()) {
        let m = compute_risk(&inputs);
        prop_assert!(close(m.firm_cut + m.trader_payout, m.target_profit));
    }

    #[test]
    fn split_never_touches_limits(inputs in arb_risk_inputs()) {
        let a = compute_risk(&RiskInputs { profit_split: ProfitSplit::Eighty, ..inputs });
        let b = compute_risk(&RiskInputs { profit_split: ProfitSplit::Ninety, ..inputs });
        prop_assert_eq!(a.daily_loss_limit, b.daily_loss_limit);
        prop_assert_eq!(a.max_loss_limit, b.max_loss_limit);
        prop_assert_eq!(a.health_pct, b.health_pct);
        prop_assert!(b.trader_payout >= a.trader_payout);
    }
}

// ── 3. Health bounds ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn health_within_bounds(inputs in arb_risk_inputs()) {
        let m = compute_risk(&inputs);
        prop_assert!(m.health_pct.is_finite());
        prop_assert!((0.0..=100.0).contains(&m.health_pct));
    }

    #[test]
    fn zero_drawdown_health_is_hundred(inputs in arb_risk_inputs()) {
        let m = compute_risk(&RiskInputs { max_drawdown_pct: 0.0, ..inputs });
        prop_assert_eq!(m.health_pct, 100.0);
    }

    #[test]
    fn engine_never_emits_non_finite(
        account in -1e9..1e9_f64,
        daily in -100.0..100.0_f64,
        max in -100.0..100.0_f64,
        target in -100.0..100.0_f64,
        risk in -100.0..100.0_f64,
        stop in -1_000.0..1_000.0_f64,
        tick_value in -100.0..100.0_f64,
    ) {
        let r = compute_risk(&RiskInputs {
            account_size: account,
            daily_drawdown_pct: daily,
            max_drawdown_pct: max,
            profit_target_pct: target,
            profit_split: ProfitSplit::Eighty,
        });
        for v in [
            r.daily_loss_limit,
            r.max_loss_limit,
            r.target_profit,
            r.firm_cut,
            r.trader_payout,
            r.health_pct,
        ] {
            prop_assert!(v.is_finite());
        }

        let p = compute_position(
            &PositionInputs {
                account_size: account,
                risk_pct: risk,
                stop_loss_units: stop,
                tick_value_override: None,
            },
            Some(&preset(tick_value)),
        );
        prop_assert!(p.risk_dollars.is_finite());
        prop_assert!(p.position_size.is_finite());
    }
}

// ── 4. Position size ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn zero_stop_or_tick_value_means_zero_size(
        account in arb_account(),
        risk in arb_pct(),
        stop in 0.0..500.0_f64,
        tick_value in 0.0..100.0_f64,
        zero_stop in any::<bool>(),
    ) {
        let (stop, tick_value) = if zero_stop { (0.0, tick_value) } else { (stop, 0.0) };
        let m = compute_position(
            &PositionInputs {
                account_size: account,
                risk_pct: risk,
                stop_loss_units: stop,
                tick_value_override: None,
            },
            Some(&preset(tick_value)),
        );
        prop_assert_eq!(m.position_size, 0.0);
    }

    #[test]
    fn size_reconstructs_dollar_risk(
        account in arb_account(),
        risk in arb_pct(),
        stop in 1.0..500.0_f64,
        tick_value in 0.01..100.0_f64,
    ) {
        let m = compute_position(
            &PositionInputs {
                account_size: account,
                risk_pct: risk,
                stop_loss_units: stop,
                tick_value_override: None,
            },
            Some(&preset(tick_value)),
        );
        prop_assert!(close(m.position_size * stop * tick_value, m.risk_dollars));
    }
}

// ── Purity / memoization ─────────────────────────────────────────────

proptest! {
    #[test]
    fn identical_inputs_give_identical_outputs(inputs in arb_risk_inputs()) {
        prop_assert_eq!(compute_risk(&inputs), compute_risk(&inputs));

        let mut memo = Memo::new();
        let first = *memo.get_or_compute(&inputs, compute_risk);
        let second = *memo.get_or_compute(&inputs, |_| unreachable!("cached"));
        prop_assert_eq!(first, second);
    }
}
