//! Take-profit / stop-loss placement

use crate::common::fallback;
use crate::config::TargetConfig;
use crate::models::{IndicatorSet, SignalDirection, TradeSide, TradeTargets};

/// Derives exit levels from ATR, then lets nearby support/resistance pull
/// them in.
///
/// Base distances are `stop_atr_multiple` and `take_profit_atr_multiple` ATRs.
/// A level lying strictly between price and the raw stop moves the stop to
/// `level_offset_atr` ATRs beyond that level. A level lying strictly between
/// price and the raw take-profit moves the take-profit to `level_offset_atr`
/// ATRs short of it, unless that would put it on the wrong side of price.
/// Without a usable ATR, fixed percentage bands are used.
#[derive(Debug, Clone)]
pub struct StopLossTakeProfit {
    config: TargetConfig,
}

impl StopLossTakeProfit {
    pub fn new(config: TargetConfig) -> Self {
        Self { config }
    }

    /// Targets for a directional call; NEUTRAL has none.
    pub fn calculate(&self, direction: SignalDirection, price: f64, indicators: &IndicatorSet) -> Option<TradeTargets> {
        let side = direction.side()?;
        let atr = indicators.atr;

        if !(atr.is_finite() && atr > 0.0 && price.is_finite() && price > 0.0) {
            return Some(self.percentage_fallback(side, price));
        }

        let c = &self.config;
        let offset = atr * c.level_offset_atr;
        let (support, resistance) = (indicators.support, indicators.resistance);

        let (stop_loss, take_profit) = match side {
            TradeSide::Buy => {
                let mut stop = price - atr * c.stop_atr_multiple;
                let mut target = price + atr * c.take_profit_atr_multiple;

                if support > stop && support < price {
                    stop = support - offset;
                }
                if resistance < target && resistance > price && resistance - offset > price {
                    target = resistance - offset;
                }
                (stop, target)
            }
            TradeSide::Sell => {
                let mut stop = price + atr * c.stop_atr_multiple;
                let mut target = price - atr * c.take_profit_atr_multiple;

                if resistance < stop && resistance > price {
                    stop = resistance + offset;
                }
                if support > target && support < price && support + offset < price {
                    target = support + offset;
                }
                (stop, target)
            }
        };

        Some(Self::finish(price, take_profit, stop_loss))
    }

    fn percentage_fallback(&self, side: TradeSide, price: f64) -> TradeTargets {
        let tp = self.config.fallback_take_profit_pct / 100.0;
        let sl = self.config.fallback_stop_pct / 100.0;
        let (take_profit, stop_loss) = match side {
            TradeSide::Buy => (price * (1.0 + tp), price * (1.0 - sl)),
            TradeSide::Sell => (price * (1.0 - tp), price * (1.0 + sl)),
        };

        TradeTargets {
            take_profit,
            stop_loss,
            risk_reward_ratio: fallback::RISK_REWARD_DEFAULT,
        }
    }

    fn finish(price: f64, take_profit: f64, stop_loss: f64) -> TradeTargets {
        TradeTargets {
            take_profit,
            stop_loss,
            risk_reward_ratio: fallback::risk_reward(take_profit - price, price - stop_loss),
        }
    }
}

impl Default for StopLossTakeProfit {
    fn default() -> Self {
        Self::new(TargetConfig::default())
    }
}
