//! The CLDR plural rule bodies.
//!
//! One entry per CLDR rule family, each registered for every locale in the
//! family. Rule bodies reproduce the CLDR boolean conditions, quoted above
//! each branch in CLDR's own notation. Branch order is significant: the
//! first matching condition wins and reordering changes results (e.g. a
//! rule that says "zero if n = 0, else one if i = 0,1" classifies 0
//! differently if flipped).
//!
//! Two predicate families appear and must not be confused: `n`-conditions
//! ([`crate::operands::Operands::n_equals_any`] and friends) are true only
//! for whole numbers (`t == 0`), while bare conditions on `i`, `v`, `w`,
//! `f`, `t` carry no such gate.

use crate::category::PluralCategory::{Few, Many, One, Other, Two, Zero};
use crate::operands::{equals_any, in_range};
use crate::registry::PluralRules;

/// Installs the full CLDR rule table into `table`.
#[allow(clippy::too_many_lines)]
pub(crate) fn install(table: &mut PluralRules) {
    // Single-form languages: everything is "other".
    table.register(
        &[
            "bm", "bo", "dz", "id", "ig", "ii", "in", "ja", "jbo", "jv", "jw", "kde", "kea", "km",
            "ko", "lkt", "lo", "ms", "my", "nqo", "root", "sah", "ses", "sg", "th", "to", "vi",
            "wo", "yo", "zh",
        ],
        |_| Other,
    );

    table.register(&["am", "as", "bn", "fa", "gu", "hi", "kn", "mr", "zu"], |ops| {
        // one: i = 0 or n = 1
        if ops.i == 0 || ops.n_equals_any(&[1]) {
            return One;
        }
        Other
    });

    table.register(&["ff", "fr", "hy", "kab"], |ops| {
        // one: i = 0,1
        if equals_any(ops.i, &[0, 1]) {
            return One;
        }
        Other
    });

    table.register(
        &[
            "ast", "ca", "de", "en", "et", "fi", "fy", "gl", "it", "ji", "nl", "sv", "sw", "ur",
            "yi",
        ],
        |ops| {
            // one: i = 1 and v = 0
            if ops.i == 1 && ops.v == 0 {
                return One;
            }
            Other
        },
    );

    table.register(&["si"], |ops| {
        // one: n = 0,1 or i = 0 and f = 1
        if ops.n_equals_any(&[0, 1]) || (ops.i == 0 && ops.f == 1) {
            return One;
        }
        Other
    });

    table.register(&["ak", "bh", "guw", "ln", "mg", "nso", "pa", "ti", "wa"], |ops| {
        // one: n = 0..1
        if ops.n_in_range(0, 1) {
            return One;
        }
        Other
    });

    table.register(&["tzm"], |ops| {
        // one: n = 0..1 or n = 11..99
        if ops.n_in_range(0, 1) || ops.n_in_range(11, 99) {
            return One;
        }
        Other
    });

    table.register(&["pt"], |ops| {
        // one: n = 0..2 and n != 2
        if ops.n_in_range(0, 2) && !ops.n_equals_any(&[2]) {
            return One;
        }
        Other
    });

    table.register(
        &[
            "af", "asa", "az", "bem", "bez", "bg", "brx", "ce", "cgg", "chr", "ckb", "dv", "ee",
            "el", "eo", "es", "eu", "fo", "fur", "gsw", "ha", "haw", "hu", "jgo", "jmc", "ka",
            "kaj", "kcg", "kk", "kkj", "kl", "ks", "ksb", "ku", "ky", "lb", "lg", "mas", "mgo",
            "ml", "mn", "nah", "nb", "nd", "ne", "nn", "nnh", "no", "nr", "ny", "nyn", "om", "or",
            "os", "pap", "ps", "rm", "rof", "rwk", "saq", "sdh", "seh", "sn", "so", "sq", "ss",
            "ssy", "st", "syr", "ta", "te", "teo", "tig", "tk", "tn", "tr", "ts", "ug", "uz", "ve",
            "vo", "vun", "wae", "xh", "xog",
        ],
        |ops| {
            // one: n = 1
            if ops.n_equals_any(&[1]) {
                return One;
            }
            Other
        },
    );

    table.register(&["pt_PT"], |ops| {
        // one: n = 1 and v = 0
        if ops.n_equals_any(&[1]) && ops.v == 0 {
            return One;
        }
        Other
    });

    table.register(&["da"], |ops| {
        // one: n = 1 or t != 0 and i = 0,1
        if ops.n_equals_any(&[1]) || (ops.t != 0 && equals_any(ops.i, &[0, 1])) {
            return One;
        }
        Other
    });

    table.register(&["is"], |ops| {
        // one: t = 0 and i % 10 = 1 and i % 100 != 11 or t != 0
        if (ops.t == 0 && ops.i % 10 == 1 && ops.i % 100 != 11) || ops.t != 0 {
            return One;
        }
        Other
    });

    table.register(&["mk"], |ops| {
        // one: v = 0 and i % 10 = 1 or f % 10 = 1
        if (ops.v == 0 && ops.i % 10 == 1) || ops.f % 10 == 1 {
            return One;
        }
        Other
    });

    table.register(&["fil", "tl"], |ops| {
        // one: v = 0 and i = 1,2,3
        //   or v = 0 and i % 10 != 4,6,9
        //   or v != 0 and f % 10 != 4,6,9
        if (ops.v == 0 && equals_any(ops.i, &[1, 2, 3]))
            || (ops.v == 0 && !equals_any(ops.i % 10, &[4, 6, 9]))
            || (ops.v != 0 && !equals_any(ops.f % 10, &[4, 6, 9]))
        {
            return One;
        }
        Other
    });

    table.register(&["lv", "prg"], |ops| {
        // zero: n % 10 = 0 or n % 100 = 11..19 or v = 2 and f % 100 = 11..19
        if ops.n_mod_equals_any(10, &[0])
            || ops.n_mod_in_range(100, 11, 19)
            || (ops.v == 2 && in_range(ops.f % 100, 11, 19))
        {
            return Zero;
        }
        // one: n % 10 = 1 and n % 100 != 11
        //   or v = 2 and f % 10 = 1 and f % 100 != 11
        //   or v != 2 and f % 10 = 1
        if (ops.n_mod_equals_any(10, &[1]) && !ops.n_mod_equals_any(100, &[11]))
            || (ops.v == 2 && ops.f % 10 == 1 && ops.f % 100 != 11)
            || (ops.v != 2 && ops.f % 10 == 1)
        {
            return One;
        }
        Other
    });

    table.register(&["lag"], |ops| {
        // zero: n = 0
        if ops.n_equals_any(&[0]) {
            return Zero;
        }
        // one: i = 0,1 and n != 0
        if equals_any(ops.i, &[0, 1]) && !ops.n_equals_any(&[0]) {
            return One;
        }
        Other
    });

    table.register(&["ksh"], |ops| {
        // zero: n = 0
        if ops.n_equals_any(&[0]) {
            return Zero;
        }
        // one: n = 1
        if ops.n_equals_any(&[1]) {
            return One;
        }
        Other
    });

    table.register(
        &["iu", "kw", "naq", "se", "sma", "smi", "smj", "smn", "sms"],
        |ops| {
            // one: n = 1
            if ops.n_equals_any(&[1]) {
                return One;
            }
            // two: n = 2
            if ops.n_equals_any(&[2]) {
                return Two;
            }
            Other
        },
    );

    table.register(&["shi"], |ops| {
        // one: i = 0 or n = 1
        if ops.i == 0 || ops.n_equals_any(&[1]) {
            return One;
        }
        // few: n = 2..10
        if ops.n_in_range(2, 10) {
            return Few;
        }
        Other
    });

    table.register(&["mo", "ro"], |ops| {
        // one: i = 1 and v = 0
        if ops.i == 1 && ops.v == 0 {
            return One;
        }
        // few: v != 0 or n = 0 or n != 1 and n % 100 = 1..19
        if ops.v != 0
            || ops.n_equals_any(&[0])
            || (!ops.n_equals_any(&[1]) && ops.n_mod_in_range(100, 1, 19))
        {
            return Few;
        }
        Other
    });

    table.register(&["bs", "hr", "sh", "sr"], |ops| {
        // one: v = 0 and i % 10 = 1 and i % 100 != 11 or f % 10 = 1 and f % 100 != 11
        if (ops.v == 0 && ops.i % 10 == 1 && ops.i % 100 != 11)
            || (ops.f % 10 == 1 && ops.f % 100 != 11)
        {
            return One;
        }
        // few: v = 0 and i % 10 = 2..4 and i % 100 != 12..14
        //   or f % 10 = 2..4 and f % 100 != 12..14
        if (ops.v == 0 && in_range(ops.i % 10, 2, 4) && !in_range(ops.i % 100, 12, 14))
            || (in_range(ops.f % 10, 2, 4) && !in_range(ops.f % 100, 12, 14))
        {
            return Few;
        }
        Other
    });

    table.register(&["gd"], |ops| {
        // one: n = 1,11
        if ops.n_equals_any(&[1, 11]) {
            return One;
        }
        // two: n = 2,12
        if ops.n_equals_any(&[2, 12]) {
            return Two;
        }
        // few: n = 3..10,13..19
        if ops.n_in_range(3, 10) || ops.n_in_range(13, 19) {
            return Few;
        }
        Other
    });

    table.register(&["sl"], |ops| {
        // one: v = 0 and i % 100 = 1
        if ops.v == 0 && ops.i % 100 == 1 {
            return One;
        }
        // two: v = 0 and i % 100 = 2
        if ops.v == 0 && ops.i % 100 == 2 {
            return Two;
        }
        // few: v = 0 and i % 100 = 3..4 or v != 0
        if (ops.v == 0 && in_range(ops.i % 100, 3, 4)) || ops.v != 0 {
            return Few;
        }
        Other
    });

    table.register(&["dsb", "hsb"], |ops| {
        // one: v = 0 and i % 100 = 1 or f % 100 = 1
        if (ops.v == 0 && ops.i % 100 == 1) || ops.f % 100 == 1 {
            return One;
        }
        // two: v = 0 and i % 100 = 2 or f % 100 = 2
        if (ops.v == 0 && ops.i % 100 == 2) || ops.f % 100 == 2 {
            return Two;
        }
        // few: v = 0 and i % 100 = 3..4 or f % 100 = 3..4
        if (ops.v == 0 && in_range(ops.i % 100, 3, 4)) || in_range(ops.f % 100, 3, 4) {
            return Few;
        }
        Other
    });

    table.register(&["he", "iw"], |ops| {
        // one: i = 1 and v = 0
        if ops.i == 1 && ops.v == 0 {
            return One;
        }
        // two: i = 2 and v = 0
        if ops.i == 2 && ops.v == 0 {
            return Two;
        }
        // many: v = 0 and n != 0..10 and n % 10 = 0
        if ops.v == 0 && !ops.n_in_range(0, 10) && ops.n_mod_equals_any(10, &[0]) {
            return Many;
        }
        Other
    });

    table.register(&["cs", "sk"], |ops| {
        // one: i = 1 and v = 0
        if ops.i == 1 && ops.v == 0 {
            return One;
        }
        // few: i = 2..4 and v = 0
        if in_range(ops.i, 2, 4) && ops.v == 0 {
            return Few;
        }
        // many: v != 0
        if ops.v != 0 {
            return Many;
        }
        Other
    });

    table.register(&["pl"], |ops| {
        // one: i = 1 and v = 0
        if ops.i == 1 && ops.v == 0 {
            return One;
        }
        // few: v = 0 and i % 10 = 2..4 and i % 100 != 12..14
        if ops.v == 0 && in_range(ops.i % 10, 2, 4) && !in_range(ops.i % 100, 12, 14) {
            return Few;
        }
        // many: v = 0 and i != 1 and i % 10 = 0..1
        //    or v = 0 and i % 10 = 5..9
        //    or v = 0 and i % 100 = 12..14
        if (ops.v == 0 && ops.i != 1 && in_range(ops.i % 10, 0, 1))
            || (ops.v == 0 && in_range(ops.i % 10, 5, 9))
            || (ops.v == 0 && in_range(ops.i % 100, 12, 14))
        {
            return Many;
        }
        Other
    });

    table.register(&["be"], |ops| {
        // one: n % 10 = 1 and n % 100 != 11
        if ops.n_mod_equals_any(10, &[1]) && !ops.n_mod_equals_any(100, &[11]) {
            return One;
        }
        // few: n % 10 = 2..4 and n % 100 != 12..14
        if ops.n_mod_in_range(10, 2, 4) && !ops.n_mod_in_range(100, 12, 14) {
            return Few;
        }
        // many: n % 10 = 0 or n % 10 = 5..9 or n % 100 = 11..14
        if ops.n_mod_equals_any(10, &[0])
            || ops.n_mod_in_range(10, 5, 9)
            || ops.n_mod_in_range(100, 11, 14)
        {
            return Many;
        }
        Other
    });

    table.register(&["lt"], |ops| {
        // one: n % 10 = 1 and n % 100 != 11..19
        if ops.n_mod_equals_any(10, &[1]) && !ops.n_mod_in_range(100, 11, 19) {
            return One;
        }
        // few: n % 10 = 2..9 and n % 100 != 11..19
        if ops.n_mod_in_range(10, 2, 9) && !ops.n_mod_in_range(100, 11, 19) {
            return Few;
        }
        // many: f != 0
        if ops.f != 0 {
            return Many;
        }
        Other
    });

    table.register(&["mt"], |ops| {
        // one: n = 1
        if ops.n_equals_any(&[1]) {
            return One;
        }
        // few: n = 0 or n % 100 = 2..10
        if ops.n_equals_any(&[0]) || ops.n_mod_in_range(100, 2, 10) {
            return Few;
        }
        // many: n % 100 = 11..19
        if ops.n_mod_in_range(100, 11, 19) {
            return Many;
        }
        Other
    });

    table.register(&["ru", "uk"], |ops| {
        // one: v = 0 and i % 10 = 1 and i % 100 != 11
        if ops.v == 0 && ops.i % 10 == 1 && ops.i % 100 != 11 {
            return One;
        }
        // few: v = 0 and i % 10 = 2..4 and i % 100 != 12..14
        if ops.v == 0 && in_range(ops.i % 10, 2, 4) && !in_range(ops.i % 100, 12, 14) {
            return Few;
        }
        // many: v = 0 and i % 10 = 0 or v = 0 and i % 10 = 5..9 or v = 0 and i % 100 = 11..14
        if (ops.v == 0 && ops.i % 10 == 0)
            || (ops.v == 0 && in_range(ops.i % 10, 5, 9))
            || (ops.v == 0 && in_range(ops.i % 100, 11, 14))
        {
            return Many;
        }
        Other
    });

    table.register(&["br"], |ops| {
        // one: n % 10 = 1 and n % 100 != 11,71,91
        if ops.n_mod_equals_any(10, &[1]) && !ops.n_mod_equals_any(100, &[11, 71, 91]) {
            return One;
        }
        // two: n % 10 = 2 and n % 100 != 12,72,92
        if ops.n_mod_equals_any(10, &[2]) && !ops.n_mod_equals_any(100, &[12, 72, 92]) {
            return Two;
        }
        // few: n % 10 = 3..4,9 and n % 100 != 10..19,70..79,90..99
        if (ops.n_mod_in_range(10, 3, 4) || ops.n_mod_equals_any(10, &[9]))
            && !(ops.n_mod_in_range(100, 10, 19)
                || ops.n_mod_in_range(100, 70, 79)
                || ops.n_mod_in_range(100, 90, 99))
        {
            return Few;
        }
        // many: n != 0 and n % 1000000 = 0
        if !ops.n_equals_any(&[0]) && ops.n_mod_equals_any(1_000_000, &[0]) {
            return Many;
        }
        Other
    });

    table.register(&["ga"], |ops| {
        // one: n = 1
        if ops.n_equals_any(&[1]) {
            return One;
        }
        // two: n = 2
        if ops.n_equals_any(&[2]) {
            return Two;
        }
        // few: n = 3..6
        if ops.n_in_range(3, 6) {
            return Few;
        }
        // many: n = 7..10
        if ops.n_in_range(7, 10) {
            return Many;
        }
        Other
    });

    table.register(&["gv"], |ops| {
        // one: v = 0 and i % 10 = 1
        if ops.v == 0 && ops.i % 10 == 1 {
            return One;
        }
        // two: v = 0 and i % 10 = 2
        if ops.v == 0 && ops.i % 10 == 2 {
            return Two;
        }
        // few: v = 0 and i % 100 = 0,20,40,60,80
        if ops.v == 0 && equals_any(ops.i % 100, &[0, 20, 40, 60, 80]) {
            return Few;
        }
        // many: v != 0
        if ops.v != 0 {
            return Many;
        }
        Other
    });

    table.register(&["ar"], |ops| {
        // zero: n = 0
        if ops.n_equals_any(&[0]) {
            return Zero;
        }
        // one: n = 1
        if ops.n_equals_any(&[1]) {
            return One;
        }
        // two: n = 2
        if ops.n_equals_any(&[2]) {
            return Two;
        }
        // few: n % 100 = 3..10
        if ops.n_mod_in_range(100, 3, 10) {
            return Few;
        }
        // many: n % 100 = 11..99
        if ops.n_mod_in_range(100, 11, 99) {
            return Many;
        }
        Other
    });

    table.register(&["cy"], |ops| {
        // zero: n = 0
        if ops.n_equals_any(&[0]) {
            return Zero;
        }
        // one: n = 1
        if ops.n_equals_any(&[1]) {
            return One;
        }
        // two: n = 2
        if ops.n_equals_any(&[2]) {
            return Two;
        }
        // few: n = 3
        if ops.n_equals_any(&[3]) {
            return Few;
        }
        // many: n = 6
        if ops.n_equals_any(&[6]) {
            return Many;
        }
        Other
    });
}

#[cfg(test)]
mod tests {
    use crate::category::PluralCategory::{self, Few, Many, One, Other, Two, Zero};
    use crate::registry::{classify, PluralRules};

    fn int(locale: &str, count: i64) -> PluralCategory {
        classify(locale, count).unwrap()
    }

    fn dec(locale: &str, count: &str) -> PluralCategory {
        classify(locale, count).unwrap()
    }

    #[test]
    fn test_english_two_form() {
        assert_eq!(int("en", 1), One);
        assert_eq!(int("en", 0), Other);
        assert_eq!(int("en", 2), Other);
        // v != 0 blocks "one", and 1.5 is not a whole number anyway.
        assert_eq!(dec("en", "1.5"), Other);
        assert_eq!(dec("en", "1.0"), Other);
    }

    #[test]
    fn test_french_includes_zero_in_one() {
        assert_eq!(int("fr", 0), One);
        assert_eq!(int("fr", 1), One);
        assert_eq!(dec("fr", "1.5"), One); // i = 1
        assert_eq!(int("fr", 2), Other);
    }

    #[test]
    fn test_russian_four_form() {
        assert_eq!(int("ru", 1), One);
        assert_eq!(int("ru", 2), Few);
        assert_eq!(int("ru", 4), Few);
        assert_eq!(int("ru", 5), Many);
        assert_eq!(int("ru", 11), Many);
        assert_eq!(int("ru", 12), Many);
        assert_eq!(int("ru", 21), One);
        assert_eq!(int("ru", 22), Few);
        assert_eq!(int("ru", 100), Many);
        // Fractions carry v != 0, which excludes every named branch.
        assert_eq!(dec("ru", "1.5"), Other);
        assert_eq!(dec("ru", "2.0"), Other);
    }

    #[test]
    fn test_polish_many_excludes_one() {
        assert_eq!(int("pl", 1), One);
        assert_eq!(int("pl", 2), Few);
        assert_eq!(int("pl", 5), Many);
        assert_eq!(int("pl", 12), Many);
        assert_eq!(int("pl", 21), Many); // i % 10 = 1 but i != 1
        assert_eq!(int("pl", 22), Few);
    }

    #[test]
    fn test_czech_fraction_is_many() {
        assert_eq!(int("cs", 1), One);
        assert_eq!(int("cs", 3), Few);
        assert_eq!(dec("cs", "1.5"), Many);
        assert_eq!(int("cs", 5), Other);
    }

    #[test]
    fn test_arabic_six_form() {
        assert_eq!(int("ar", 0), Zero);
        assert_eq!(int("ar", 1), One);
        assert_eq!(int("ar", 2), Two);
        assert_eq!(int("ar", 3), Few);
        assert_eq!(int("ar", 10), Few);
        assert_eq!(int("ar", 103), Few);
        assert_eq!(int("ar", 11), Many);
        assert_eq!(int("ar", 99), Many);
        assert_eq!(int("ar", 100), Other);
        assert_eq!(int("ar", 102), Other);
    }

    #[test]
    fn test_welsh_six_form() {
        assert_eq!(int("cy", 0), Zero);
        assert_eq!(int("cy", 1), One);
        assert_eq!(int("cy", 2), Two);
        assert_eq!(int("cy", 3), Few);
        assert_eq!(int("cy", 6), Many);
        assert_eq!(int("cy", 4), Other);
    }

    #[test]
    fn test_latvian_zero_form() {
        assert_eq!(int("lv", 0), Zero);
        assert_eq!(int("lv", 10), Zero);
        assert_eq!(int("lv", 11), Zero);
        assert_eq!(int("lv", 19), Zero);
        assert_eq!(int("lv", 1), One);
        assert_eq!(int("lv", 21), One);
        assert_eq!(int("lv", 2), Other);
    }

    #[test]
    fn test_lag_order_matters() {
        // 0 must hit the zero branch before the "i = 0,1" one branch.
        assert_eq!(int("lag", 0), Zero);
        assert_eq!(int("lag", 1), One);
        assert_eq!(dec("lag", "0.5"), One); // i = 0, n != 0
        assert_eq!(int("lag", 2), Other);
    }

    #[test]
    fn test_scottish_gaelic() {
        assert_eq!(int("gd", 1), One);
        assert_eq!(int("gd", 11), One);
        assert_eq!(int("gd", 2), Two);
        assert_eq!(int("gd", 12), Two);
        assert_eq!(int("gd", 3), Few);
        assert_eq!(int("gd", 13), Few);
        assert_eq!(int("gd", 20), Other);
    }

    #[test]
    fn test_irish_five_form() {
        assert_eq!(int("ga", 1), One);
        assert_eq!(int("ga", 2), Two);
        assert_eq!(int("ga", 4), Few);
        assert_eq!(int("ga", 8), Many);
        assert_eq!(int("ga", 11), Other);
    }

    #[test]
    fn test_breton_million_many() {
        assert_eq!(int("br", 1), One);
        assert_eq!(int("br", 22), Two);
        assert_eq!(int("br", 3), Few);
        assert_eq!(int("br", 11), Other); // 11 excluded from "one"
        assert_eq!(int("br", 1_000_000), Many);
        assert_eq!(int("br", 0), Other);
    }

    #[test]
    fn test_hebrew_many() {
        assert_eq!(int("he", 1), One);
        assert_eq!(int("he", 2), Two);
        assert_eq!(int("he", 20), Many);
        assert_eq!(int("he", 10), Other); // inside 0..10, not "many"
        assert_eq!(int("he", 3), Other);
    }

    #[test]
    fn test_maltese() {
        assert_eq!(int("mt", 1), One);
        assert_eq!(int("mt", 0), Few);
        assert_eq!(int("mt", 105), Few);
        assert_eq!(int("mt", 111), Many);
        assert_eq!(int("mt", 120), Other);
    }

    #[test]
    fn test_lithuanian_fraction_many() {
        assert_eq!(int("lt", 1), One);
        assert_eq!(int("lt", 2), Few);
        assert_eq!(int("lt", 11), Other);
        assert_eq!(dec("lt", "1.5"), Many); // f != 0
    }

    #[test]
    fn test_danish_fraction_one() {
        assert_eq!(int("da", 1), One);
        assert_eq!(dec("da", "1.1"), One); // t != 0 and i = 0,1
        assert_eq!(dec("da", "2.5"), Other);
    }

    #[test]
    fn test_icelandic() {
        assert_eq!(int("is", 1), One);
        assert_eq!(int("is", 21), One);
        assert_eq!(int("is", 11), Other);
        assert_eq!(dec("is", "1.5"), One); // t != 0
    }

    #[test]
    fn test_portuguese_variants_differ() {
        // European Portuguese excludes 0 from "one"; Brazilian includes 0 and 1.
        assert_eq!(int("pt", 0), One);
        assert_eq!(int("pt", 1), One);
        assert_eq!(int("pt", 2), Other);
        assert_eq!(int("pt_PT", 0), Other);
        assert_eq!(int("pt_PT", 1), One);
    }

    #[test]
    fn test_slovenian_dual() {
        assert_eq!(int("sl", 101), One);
        assert_eq!(int("sl", 102), Two);
        assert_eq!(int("sl", 103), Few);
        assert_eq!(dec("sl", "1.5"), Few); // v != 0
        assert_eq!(int("sl", 105), Other);
    }

    #[test]
    fn test_serbo_croatian_fractions() {
        assert_eq!(int("sr", 1), One);
        assert_eq!(dec("sr", "0.1"), One); // f % 10 = 1
        assert_eq!(dec("sr", "0.2"), Few);
        assert_eq!(int("sr", 5), Other);
    }

    #[test]
    fn test_every_locale_classifies_a_sample_grid() {
        let table = PluralRules::shared();
        let decimals = ["0.5", "1.0", "1.5", "2.00", "11.0", "1.11"];
        for locale in table.locales() {
            for count in 0..=120 {
                table
                    .classify_count(locale, &i64::from(count).into())
                    .unwrap();
            }
            for decimal in decimals {
                table.classify_count(locale, &decimal.into()).unwrap();
            }
        }
    }
}
