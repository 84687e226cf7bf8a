//! Property tests for cycle arithmetic and calendar conversion.

use bazi_base::{
    Branch, LunarDate, Pillar, Stem, index_to_pillar, lunar_to_solar, pillar_to_index,
    solar_to_lunar,
};
use bazi_time::CivilDate;
use proptest::prelude::*;

proptest! {
    #[test]
    fn index_round_trips(i in 0u8..60) {
        let p = index_to_pillar(i).unwrap();
        prop_assert_eq!(pillar_to_index(p.stem(), p.branch()).unwrap(), i);
        prop_assert_eq!(p.stem().index(), i % 10);
        prop_assert_eq!(p.branch().index(), i % 12);
    }

    #[test]
    fn pairs_are_valid_iff_parities_match(s in 0i64..10, b in 0i64..12) {
        let stem = Stem::from_cycle(s);
        let branch = Branch::from_cycle(b);
        let result = pillar_to_index(stem, branch);
        prop_assert_eq!(result.is_ok(), s % 2 == b % 2);
    }

    #[test]
    fn offset_is_additive(i in 0i64..60, a in -500i64..500, b in -500i64..500) {
        let p = Pillar::from_cycle(i);
        prop_assert_eq!(p.offset(a).offset(b), p.offset(a + b));
        prop_assert_eq!(p.offset(60), p);
    }

    #[test]
    fn solar_round_trips_through_lunar(days in 0i64..73_412) {
        let date = CivilDate::new(1900, 1, 31).unwrap().add_days(days);
        let lunar = solar_to_lunar(date).unwrap();
        prop_assert_eq!(lunar_to_solar(lunar).unwrap(), date);
    }

    #[test]
    fn valid_lunar_dates_round_trip(year in 1900i32..=2100, month in 1u8..=12, day in 1u8..=29) {
        let lunar = LunarDate::new(year, month, day, false).unwrap();
        let solar = lunar_to_solar(lunar).unwrap();
        prop_assert_eq!(solar_to_lunar(solar).unwrap(), lunar);
    }
}
