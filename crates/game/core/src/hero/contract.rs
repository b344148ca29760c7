/// Persistent contract fields of a hero.
///
/// A hero with `turns_remaining > 0` is under contract. The other fields keep
/// the terms of the most recent contract after it runs out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroContract {
    pub signing_bonus: u64,
    pub salary_per_turn: u64,
    pub contract_length_years: u8,
    pub turns_remaining: u32,
}

impl HeroContract {
    pub fn is_active(&self) -> bool {
        self.turns_remaining > 0
    }

    /// Counts down one turn. Returns true on the turn the contract runs out.
    pub fn tick(&mut self) -> bool {
        if self.turns_remaining == 0 {
            return false;
        }
        self.turns_remaining -= 1;
        self.turns_remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_reports_expiry_once() {
        let mut contract = HeroContract {
            turns_remaining: 2,
            ..HeroContract::default()
        };
        assert!(!contract.tick());
        assert!(contract.tick());
        assert!(!contract.is_active());
        assert!(!contract.tick());
    }
}
