// Breach tracking across runs
use crate::model::{Alert, BreachState, Decision, DropTier, PriceSample};

/// Drop tiers, most severe first. The first tier reached wins.
const DROP_TIERS: [DropTier; 2] = [DropTier::TenPercent, DropTier::FivePercent];

/// Decides whether this run alerts and what breach state to persist.
pub fn evaluate(sample: &PriceSample, prior: BreachState) -> Decision {
    let price = sample.current_price;

    if price >= sample.moving_average {
        return Decision {
            alert: None,
            next: BreachState::absent(),
        };
    }

    let Some(anchor) = prior.below_price else {
        return Decision {
            alert: Some(Alert::Breakdown {
                price,
                moving_average: sample.moving_average,
            }),
            next: BreachState::at(price),
        };
    };

    // The anchor is kept even when a tier fires, so the same tier repeats
    // on every run while the drop holds.
    let drop_pct = (anchor - price) / anchor * 100.0;
    let alert = DROP_TIERS
        .iter()
        .find(|tier| drop_pct >= tier.threshold_pct())
        .map(|&tier| Alert::Drop {
            tier,
            price,
            anchor,
            drop_pct,
        });

    Decision {
        alert,
        next: prior,
    }
}
