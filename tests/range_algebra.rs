use datespan::{Date, Error, Range};

// one of every shape, all valid
fn shapes() -> Vec<Range> {
    vec![
        Range::empty(),
        Range::forever(),
        Range::end_bounded(Date::new(2015, 6, 30)),
        Range::start_bounded(Date::new(2015, 11, 1)),
        Range::entire_year(2015),
        Range::entire_month(2015, 11),
        Range::entire_month(2016, 2),
        Range::single_day(Date::new(2015, 11, 30)),
    ]
}

#[test]
fn named_constructors() {
    assert!(Range::infinity().is_infinity());
    assert!(Range::empty().is_empty());
    assert!(Range::never().equals(&Range::empty()));
    assert!(Range::forever().equals(&Range::infinity()));
    assert!(!Range::forever().equals(&Range::empty()));
    assert!(!Range::forever().is_empty());
    // both are without bounds, only one of them is empty
    assert!(Range::empty().is_zero());
    assert!(Range::forever().is_zero());
    assert!(!Range::entire_year(2015).is_zero());

    let year = Range::entire_year(2016);
    assert_eq!(year.start(), Some(Date::new(2016, 1, 1)));
    assert_eq!(year.end(), Some(Date::new(2016, 12, 31)));
    assert_eq!(Range::entire_month(2015, 12).end(), Some(Date::new(2015, 12, 31)));
    assert_eq!(Range::entire_month(2015, 4).end(), Some(Date::new(2015, 4, 30)));
    assert_eq!(Range::entire_month(2015, 13), Range::entire_month(2016, 1));
    assert_eq!(Range::from_bounds(None, None), Range::forever());
    assert_eq!(Range::from_bounds(Some(Date::new(2015, 1, 1)), None), Range::start_bounded(Date::new(2015, 1, 1)));
    assert_eq!(Range::only_today(), Range::single_day(Date::today()));
}

#[test]
fn days() {
    assert_eq!(Range::empty().days(), 0);
    assert_eq!(Range::forever().days(), 0);
    assert_eq!(Range::start_bounded(Date::new(2015, 1, 1)).days(), 0);
    assert_eq!(Range::end_bounded(Date::new(2015, 1, 1)).days(), 0);
    assert_eq!(Range::only_today().days(), 1);
    assert_eq!(Range::entire_year(2015).days(), 365);
    assert_eq!(Range::entire_year(2016).days(), 366);
    assert_eq!(Range::entire_month(2016, 2).days(), 29);
    assert_eq!(Range::entire_month(2015, 2).days(), 28);
    assert_eq!(Range::new(Date::new(2015, 3, 2), Date::new(2015, 3, 1)).days(), 0);
}

#[test]
fn contains() {
    let year2015 = Range::entire_year(2015);
    let dec = Range::entire_month(2015, 12);
    assert!(year2015.contains(&dec));
    assert!(dec.does_not_contain(&year2015));
    assert!(Range::forever().contains(&Range::empty()));
    assert!(Range::forever().contains(&year2015));
    assert!(!Range::empty().contains(&dec));
    assert!(Range::empty().contains(&Range::empty()));
    assert!(dec.contains(&Range::empty()));
    assert!(Range::start_bounded(Date::new(2015, 11, 1)).contains(&dec));
    assert!(!dec.contains(&Range::start_bounded(Date::new(2015, 12, 1))));
    for r in shapes() {
        assert!(r.contains(&r), "{} should contain itself", r);
    }
}

#[test]
fn intersection() {
    let year2015 = Range::entire_year(2015);
    let nov = Range::entire_month(2015, 11);
    let dec = Range::entire_month(2015, 12);
    let nov1 = Date::new(2015, 11, 1);
    let nov30 = Date::new(2015, 11, 30);
    let nov_onward = Range::start_bounded(nov1);

    assert!(Range::empty().intersection(&nov).is_empty());
    assert_eq!(nov_onward.intersection(&dec), dec);

    let intersection = year2015.intersection(&nov);
    assert_eq!(intersection.start(), Some(nov1));
    assert_eq!(intersection.end(), Some(nov30));
    assert!(Range::new(nov1, nov30).equals(&intersection));

    assert!(nov.intersection(&dec).is_empty());
    let until_june = Range::end_bounded(Date::new(2015, 6, 30));
    assert_eq!(
        until_june.intersection(&Range::start_bounded(Date::new(2015, 6, 1))),
        Range::entire_month(2015, 6)
    );
    assert_eq!(
        until_june.intersection(&Range::end_bounded(Date::new(2015, 1, 31))),
        Range::end_bounded(Date::new(2015, 1, 31))
    );
    assert!(until_june.intersection(&nov_onward).is_empty());
    // an inverted range has no days in common with anything
    let inverted = Range::new(Date::new(2015, 3, 2), Date::new(2015, 3, 1));
    assert!(inverted.intersection(&Range::forever()).is_empty());
}

#[test]
fn overlaps() {
    let year2015 = Range::entire_year(2015);
    let nov = Range::entire_month(2015, 11);
    let dec = Range::entire_month(2015, 12);
    let nov_onward = Range::start_bounded(Date::new(2015, 11, 1));

    assert!(!nov.overlaps(&dec));
    assert!(dec.overlaps(&year2015));
    assert!(nov.overlaps(&Range::single_day(Date::new(2015, 11, 30))));
    assert!(nov_onward.overlaps(&dec));
    assert!(!Range::empty().overlaps(&Range::forever()));
}

#[test]
fn union() {
    let year2015 = Range::entire_year(2015);
    let jan = Range::entire_month(2016, 1);
    let union = year2015.union(&jan);
    assert_eq!(union.start(), Some(Date::new(2015, 1, 1)));
    assert_eq!(union.end(), Some(Date::new(2016, 1, 31)));

    let feb = Range::entire_month(2016, 2);
    let union = jan.union(&feb);
    assert_eq!(union.end(), feb.end());
    assert_eq!(union.start(), jan.start());

    // the gap between the two is bridged
    let union = Range::entire_month(2015, 1).union(&Range::entire_month(2015, 12));
    assert_eq!(union, year2015);

    assert_eq!(Range::empty().union(&Range::empty()), Range::empty());
    assert_eq!(
        Range::end_bounded(Date::new(2015, 1, 31)).union(&feb),
        Range::end_bounded(Date::new(2016, 2, 29))
    );
    assert_eq!(
        Range::start_bounded(Date::new(2016, 1, 15)).union(&year2015),
        Range::start_bounded(Date::new(2015, 1, 1))
    );
    assert_eq!(
        Range::end_bounded(Date::new(2015, 1, 31)).union(&Range::start_bounded(Date::new(2016, 1, 1))),
        Range::forever()
    );
}

#[test]
fn algebraic_laws() {
    for a in shapes() {
        assert_eq!(a.union(&a), a, "union of {} with itself", a);
        assert_eq!(a.intersection(&a), a, "intersection of {} with itself", a);
        assert_eq!(Range::forever().intersection(&a), a);
        assert_eq!(Range::empty().union(&a), a);
        assert_eq!(Range::empty().intersection(&a), Range::empty());
        assert_eq!(Range::forever().union(&a), Range::forever());
        for b in shapes() {
            assert_eq!(a.union(&b), b.union(&a), "{} and {}", a, b);
            assert_eq!(a.intersection(&b), b.intersection(&a), "{} and {}", a, b);
            assert_eq!(a.overlaps(&b), b.overlaps(&a), "{} and {}", a, b);
            let hull = a.union(&b);
            assert!(hull.contains(&a) && hull.contains(&b), "{} covers {} and {}", hull, a, b);
        }
    }
}

#[test]
fn error() {
    assert!(Range::never().error().is_none());
    assert!(Range::forever().validate().is_ok());
    let end = Range::end_bounded(Date::new(2015, 3, 1));
    assert!(end.error().is_none(), "unbounded start dates should not error");
    let start = Range::start_bounded(Date::new(2015, 3, 1));
    assert!(start.error().is_none(), "unbounded end dates should not error");
    assert!(Range::single_day(Date::new(2015, 3, 1)).validate().is_ok());

    let invalid = Range::new(Date::new(2015, 3, 2), Date::new(2015, 3, 1));
    assert_eq!(
        invalid.error(),
        Some(Error::RangeOrder { start: Date::new(2015, 3, 2), end: Date::new(2015, 3, 1) })
    );
    assert!(invalid.validate().is_err());
}

#[test]
fn display() {
    assert_eq!(Range::never().to_string(), "never");
    assert_eq!(Range::forever().to_string(), "forever");
    assert_eq!(Range::entire_month(2016, 2).to_string(), "2016-02-01 to 2016-02-29");
    assert_eq!(Range::end_bounded(Date::new(2016, 2, 29)).to_string(), "until 2016-02-29");
    assert_eq!(Range::start_bounded(Date::new(2016, 2, 1)).to_string(), "2016-02-01 onward");
}

#[test]
fn iterates_days() {
    let days: Vec<Date> = Range::new(Date::new(2016, 2, 28), Date::new(2016, 3, 1)).iter().collect();
    assert_eq!(days, vec![Date::new(2016, 2, 28), Date::new(2016, 2, 29), Date::new(2016, 3, 1)]);
    assert_eq!((&Range::entire_year(2016)).into_iter().count(), 366);
    assert_eq!(Range::empty().iter().count(), 0);
    assert_eq!(Range::forever().iter().count(), 0);
    assert_eq!(Range::new(Date::new(2015, 3, 2), Date::new(2015, 3, 1)).iter().count(), 0);
}

#[test]
#[should_panic]
fn entire_year_past_the_calendar_panics() {
    Range::entire_year(i32::MAX);
}

#[test]
#[should_panic]
fn entire_month_past_the_calendar_panics() {
    Range::entire_month(i32::MAX, 12);
}
