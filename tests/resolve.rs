use chart_domain::{
    AxisId, ConfigError, DataPoint, Domain, DomainConfig, DomainError, Value, resolve,
};
use chrono::{TimeZone, Utc};

fn day(y: i32, m: u32, d: u32) -> Value {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap().into()
}

fn numeric(cfg: &DomainConfig, axis: AxisId, include_zero: bool) -> (f64, f64) {
    resolve(cfg, axis, include_zero)
        .unwrap()
        .as_numeric()
        .unwrap()
}

#[test]
fn flat_and_per_axis_domain_are_equivalent() {
    let flat = DomainConfig::builder()
        .domain(Domain::new(0, 1).unwrap())
        .build();
    let per_axis = DomainConfig::builder()
        .domain_for(AxisId::X, Domain::new(0, 1).unwrap())
        .build();
    assert_eq!(numeric(&flat, AxisId::X, false), (0.0, 1.0));
    assert_eq!(
        resolve(&flat, AxisId::X, false),
        resolve(&per_axis, AxisId::X, false)
    );
}

#[test]
fn falls_through_to_data_when_axis_absent_from_domain() {
    let cfg = DomainConfig::builder()
        .domain_for(AxisId::Y, Domain::new(1, 2).unwrap())
        .data([DataPoint::new(1, 3), DataPoint::new(3, 5)])
        .build();
    assert_eq!(numeric(&cfg, AxisId::X, false), (1.0, 3.0));
    assert_eq!(numeric(&cfg, AxisId::Y, false), (1.0, 2.0));
}

#[test]
fn dates_order_by_instant_not_insertion() {
    let cfg = DomainConfig::builder()
        .domain_for(AxisId::Y, Domain::new(1, 2).unwrap())
        .data([
            DataPoint::new(day(2022, 1, 10), 1),
            DataPoint::new(day(2022, 1, 1), 2),
        ])
        .build();
    let d = resolve(&cfg, AxisId::X, false).unwrap();
    assert_eq!(d.bounds(), (day(2022, 1, 1), day(2022, 1, 10)));
}

#[test]
fn min_max_pair_flat_and_per_axis() {
    let flat = DomainConfig::builder().min_domain(1).max_domain(10).build();
    assert_eq!(numeric(&flat, AxisId::X, false), (1.0, 10.0));

    let per_axis = DomainConfig::builder()
        .min_domain_for(AxisId::X, 1)
        .min_domain_for(AxisId::Y, 2)
        .max_domain_for(AxisId::X, 10)
        .max_domain_for(AxisId::Y, 20)
        .build();
    assert_eq!(numeric(&per_axis, AxisId::X, false), (1.0, 10.0));
    assert_eq!(numeric(&per_axis, AxisId::Y, false), (2.0, 20.0));
}

#[test]
fn explicit_domain_beats_min_max_pair() {
    let cfg = DomainConfig::builder()
        .domain(Domain::new(0, 1).unwrap())
        .min_domain(5)
        .max_domain(6)
        .data([DataPoint::new(100, 100)])
        .build();
    assert_eq!(numeric(&cfg, AxisId::Y, false), (0.0, 1.0));
}

#[test]
fn pair_split_across_forms_still_counts() {
    let cfg = DomainConfig::builder()
        .min_domain(0)
        .max_domain_for(AxisId::Y, 50)
        .data([DataPoint::new(3, 4)])
        .build();
    assert_eq!(numeric(&cfg, AxisId::Y, false), (0.0, 50.0));
    // x has only a minimum, so its data decides
    assert_eq!(numeric(&cfg, AxisId::X, false), (3.0, 3.0));
}

#[test]
fn zero_inclusion_on_data() {
    let positive = DomainConfig::builder()
        .data([DataPoint::new(1, 3), DataPoint::new(3, 5)])
        .build();
    assert_eq!(numeric(&positive, AxisId::Y, true), (0.0, 5.0));

    let straddling = DomainConfig::builder()
        .data([DataPoint::new(1, -3), DataPoint::new(3, 5)])
        .build();
    assert_eq!(numeric(&straddling, AxisId::Y, true), (-3.0, 5.0));

    let negative = DomainConfig::builder()
        .data([DataPoint::new(1, -3), DataPoint::new(3, -1)])
        .build();
    assert_eq!(numeric(&negative, AxisId::Y, true), (-3.0, 0.0));
}

#[test]
fn baseline_field_is_not_consulted() {
    let cfg = DomainConfig::builder()
        .data([
            DataPoint::new(1, 3).with_extra("y0", 2),
            DataPoint::new(3, 5).with_extra("y0", 3),
        ])
        .build();
    assert_eq!(numeric(&cfg, AxisId::Y, true), (0.0, 5.0));
}

#[test]
fn single_value_is_a_valid_domain() {
    let cfg = DomainConfig::builder()
        .data([DataPoint::new(4, 7), DataPoint::new(4, 7)])
        .build();
    assert_eq!(numeric(&cfg, AxisId::X, false), (4.0, 4.0));
}

#[test]
fn zero_inclusion_on_dates_is_a_configuration_error() {
    let cfg = DomainConfig::builder()
        .data([DataPoint::x_only(day(2022, 1, 1))])
        .build();
    assert_eq!(
        resolve(&cfg, AxisId::X, true),
        Err(DomainError::Configuration {
            axis: AxisId::X,
            source: ConfigError::ZeroOnChronological,
        })
    );
}

#[test]
fn zero_flag_is_ignored_for_explicit_date_domain() {
    let cfg = DomainConfig::builder()
        .domain(Domain::new(day(2022, 1, 1), day(2022, 2, 1)).unwrap())
        .build();
    assert!(resolve(&cfg, AxisId::X, true).is_ok());
}

#[test]
fn mixed_pair_is_a_configuration_error() {
    let cfg = DomainConfig::builder()
        .min_domain(0)
        .max_domain(day(2022, 1, 1))
        .build();
    let err = resolve(&cfg, AxisId::Y, false).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Configuration {
            axis: AxisId::Y,
            source: ConfigError::MixedBounds { .. },
        }
    ));
}

#[test]
fn mixed_data_is_a_configuration_error() {
    let cfg = DomainConfig::builder()
        .data([DataPoint::x_only(1), DataPoint::x_only(day(2022, 1, 1))])
        .build();
    assert!(matches!(
        resolve(&cfg, AxisId::X, false),
        Err(DomainError::Configuration {
            source: ConfigError::MixedData { .. },
            ..
        })
    ));
}

#[test]
fn malformed_points_do_not_blank_the_chart() {
    let cfg = DomainConfig::builder()
        .data([
            DataPoint::new(f64::NAN, 1),
            DataPoint::new(2, f64::NEG_INFINITY),
            DataPoint::y_only(9),
            DataPoint::new(6, 4),
        ])
        .build();
    assert_eq!(numeric(&cfg, AxisId::X, false), (2.0, 6.0));
    assert_eq!(numeric(&cfg, AxisId::Y, false), (1.0, 9.0));
}

#[test]
fn empty_config_is_unresolvable() {
    let err = resolve(&DomainConfig::default(), AxisId::X, false).unwrap_err();
    assert_eq!(err, DomainError::Unresolvable { axis: AxisId::X });
    assert!(err.is_unresolvable());
}

#[test]
fn all_invalid_data_is_unresolvable() {
    let cfg = DomainConfig::builder()
        .data([DataPoint::new(f64::NAN, f64::NAN)])
        .build();
    assert!(resolve(&cfg, AxisId::Y, true).unwrap_err().is_unresolvable());
}

#[test]
fn empty_data_with_explicit_domain_is_fine() {
    let cfg = DomainConfig::builder()
        .domain(Domain::new(-1, 1).unwrap())
        .build();
    assert_eq!(numeric(&cfg, AxisId::Y, true), (-1.0, 1.0));
}

#[test]
fn resolving_twice_gives_the_same_answer() {
    let cfg = DomainConfig::builder()
        .data([DataPoint::new(1, -3), DataPoint::new(3, 5)])
        .build();
    let before = cfg.clone();
    assert_eq!(
        resolve(&cfg, AxisId::Y, true),
        resolve(&cfg, AxisId::Y, true)
    );
    assert_eq!(cfg, before);
}
