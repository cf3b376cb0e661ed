use crate::survey::scoring::{get_tips, parse_age, AgeBracket, FeedbackTier};

#[test]
fn tier_tips_come_first_in_declared_order() {
    let tips = get_tips(12, "");
    assert_eq!(tips, FeedbackTier::Great.tips().to_vec());

    let tips = get_tips(3, "25");
    assert_eq!(&tips[..4], &FeedbackTier::NeedsImprovement.tips()[..]);
    assert_eq!(&tips[4..], &AgeBracket::YoungAdult.tips()[..]);
}

#[test]
fn unusable_ages_add_no_tips() {
    for age in ["", "   ", "0", "-4", "abc", "NaN", "inf"] {
        assert_eq!(get_tips(8, age).len(), 4, "age {age:?}");
    }
}

#[test]
fn positive_ages_add_two_tips() {
    for age in ["1", "17.5", "30", " 45 ", "99"] {
        assert_eq!(get_tips(8, age).len(), 6, "age {age:?}");
    }
}

#[test]
fn age_bracket_boundaries() {
    assert_eq!(AgeBracket::for_age(17.0), Some(AgeBracket::Child));
    assert_eq!(AgeBracket::for_age(18.0), Some(AgeBracket::YoungAdult));
    assert_eq!(AgeBracket::for_age(40.0), Some(AgeBracket::YoungAdult));
    assert_eq!(AgeBracket::for_age(41.0), Some(AgeBracket::MiddleAge));
    assert_eq!(AgeBracket::for_age(60.0), Some(AgeBracket::MiddleAge));
    assert_eq!(AgeBracket::for_age(61.0), Some(AgeBracket::Senior));
    assert_eq!(AgeBracket::for_age(0.0), None);
    assert_eq!(AgeBracket::for_age(-1.0), None);
}

#[test]
fn fractional_ages_compare_against_bounds_as_is() {
    assert_eq!(AgeBracket::for_age(40.5), Some(AgeBracket::MiddleAge));
    assert_eq!(AgeBracket::for_age(17.9), Some(AgeBracket::Child));
}

#[test]
fn parse_age_trims_and_rejects_non_numbers() {
    assert_eq!(parse_age(" 42 "), Some(42.0));
    assert_eq!(parse_age(""), None);
    assert_eq!(parse_age("forty"), None);
    assert_eq!(parse_age("-3"), Some(-3.0));
}
