/// Freshness band of the countdown, used to color the remaining-seconds
/// digits. The period splits into three bands at ceil(P/3) and
/// ceil(2P/3); for the standard 30s period that is 20-30 fresh,
/// 10-19 caution, 0-9 urgent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CountdownBand {
    Fresh,
    Caution,
    Urgent,
}

impl CountdownBand {
    pub fn classify(remaining: u64, period: u64) -> Self {
        let caution_floor = period.div_ceil(3);
        let fresh_floor = (2 * period).div_ceil(3);

        if remaining >= fresh_floor {
            CountdownBand::Fresh
        } else if remaining >= caution_floor {
            CountdownBand::Caution
        } else {
            CountdownBand::Urgent
        }
    }
}
