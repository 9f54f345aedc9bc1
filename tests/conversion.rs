#![allow(clippy::float_cmp, clippy::unwrap_used)]

use rand::Rng;
use test_log::test;
use unitime::{Convertable, Unit};

fn constructor(unit: Unit) -> fn(f64) -> unitime::Result<Convertable> {
    match unit {
        Unit::Nano => |v: f64| unitime::ns(v),
        Unit::Micro => |v: f64| unitime::us(v),
        Unit::Milli => |v: f64| unitime::ms(v),
        Unit::Second => |v: f64| unitime::s(v),
        Unit::Minute => |v: f64| unitime::min(v),
        Unit::Hour => |v: f64| unitime::h(v),
        Unit::Day => |v: f64| unitime::d(v),
    }
}

fn accessor(c: &Convertable, unit: Unit) -> f64 {
    match unit {
        Unit::Nano => c.nanos(),
        Unit::Micro => c.micros(),
        Unit::Milli => c.millis(),
        Unit::Second => c.seconds(),
        Unit::Minute => c.minutes(),
        Unit::Hour => c.hours(),
        Unit::Day => c.days(),
    }
}

#[allow(clippy::cast_precision_loss)]
fn expected(t: u64, from: Unit, to: Unit) -> f64 {
    if from.nanos() >= to.nanos() {
        (t * (from.nanos() / to.nanos())) as f64
    } else {
        t as f64 / (to.nanos() / from.nanos()) as f64
    }
}

#[test]
#[allow(clippy::cast_precision_loss)]
fn days_to_nanos_exhaustive() {
    for t in 0..88_888_u64 {
        let nanos = unitime::d(t).unwrap().nanos();
        assert_eq!((t * 86_400_000_000_000) as f64, nanos.round());
    }
}

#[test]
fn all_unit_pairs() {
    let mut rng = rand::thread_rng();

    for from in Unit::ALL {
        for to in Unit::ALL {
            for _ in 0..1_000 {
                let t = rng.gen_range(0..88_888_u64);

                let c = constructor(from)(t as f64).unwrap();

                assert_eq!(expected(t, from, to), accessor(&c, to), "{t}{from} -> {to}");
                assert_eq!(accessor(&c, to), c.to(to));
            }
        }
    }
}

#[test]
fn all_unit_pairs_agree_with_bound() {
    for to in Unit::ALL {
        let bound = unitime::to(to.code()).unwrap();

        for from in Unit::ALL {
            for t in [0, 1, 7, 60, 1_000, 86_399] {
                assert_eq!(
                    expected(t, from, to),
                    bound.convert(from, t).unwrap(),
                    "{t}{from} -> {to}"
                );
            }
        }
    }
}

#[test]
fn identity_round_trip() {
    let mut rng = rand::thread_rng();

    for unit in Unit::ALL {
        for _ in 0..1_000 {
            let t: f64 = rng.gen_range(-1e300..1e300);
            let c = constructor(unit)(t).unwrap();
            assert_eq!(t, accessor(&c, unit));
        }

        let t = 0.1 + 0.2;
        assert_eq!(t, accessor(&constructor(unit)(t).unwrap(), unit));
    }
}

#[test]
fn saturation() {
    for from in Unit::ALL {
        for to in Unit::ALL.into_iter().filter(|to| *to <= from) {
            let c = constructor(from)(f64::MAX).unwrap();
            assert_eq!(f64::MAX, accessor(&c, to), "{from} -> {to}");

            let c = constructor(from)(-f64::MAX).unwrap();
            assert_eq!(-f64::MAX, accessor(&c, to), "{from} -> {to}");
        }
    }
}

#[test]
fn results_are_finite() {
    let mut rng = rand::thread_rng();

    for from in Unit::ALL {
        for to in Unit::ALL {
            for _ in 0..100 {
                let t: f64 = rng.gen_range(-f64::MAX / 2.0..f64::MAX / 2.0);
                let c = constructor(from)(t).unwrap();
                assert!(accessor(&c, to).is_finite(), "{t}{from} -> {to}");
            }
        }
    }
}

#[test]
fn scenarios() {
    assert_eq!(100.0, unitime::ms(100).unwrap().millis());
    assert_eq!(-100.0, unitime::ms(-100).unwrap().millis());
    assert_eq!(24.0, unitime::d(1).unwrap().hours());
    assert_eq!(0.5, unitime::h(12).unwrap().days());
    assert_eq!(86_400_000.0, unitime::to("ms").unwrap().d(1).unwrap());
    assert_eq!(43_200_000.0, unitime::to("ms").unwrap().h(12).unwrap());
}

#[test]
fn numeric_strings() {
    for unit in Unit::ALL {
        for (raw, value) in [("1", 1.0), ("100", 100.0), ("100e2", 10_000.0)] {
            let c = match unit {
                Unit::Nano => unitime::ns(raw),
                Unit::Micro => unitime::us(raw),
                Unit::Milli => unitime::ms(raw),
                Unit::Second => unitime::s(raw),
                Unit::Minute => unitime::min(raw),
                Unit::Hour => unitime::h(raw),
                Unit::Day => unitime::d(raw),
            }
            .unwrap();

            assert_eq!(value, c.duration());
        }
    }
}
