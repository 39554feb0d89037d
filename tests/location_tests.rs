use timeclock::core::location::{
    CommandLocation, FixedLocation, LocationProvider, NoLocation, Permission, best_effort,
};
use timeclock::models::LocationReading;

#[test]
fn test_parse_provider_output() {
    assert_eq!(
        LocationReading::parse("45.5,9.25"),
        Some(LocationReading::new(45.5, 9.25, None))
    );
    assert_eq!(
        LocationReading::parse(" -33.875, 151.25 , 8 \n"),
        Some(LocationReading::new(-33.875, 151.25, Some(8.0)))
    );
    assert_eq!(LocationReading::parse(""), None);
    assert_eq!(LocationReading::parse("45.5"), None);
    assert_eq!(LocationReading::parse("north,east"), None);
    assert_eq!(LocationReading::parse("95.0,9.25"), None);
    assert_eq!(LocationReading::parse("45.5,9.25,8,1"), None);
}

#[test]
fn test_short_location_has_four_decimals() {
    assert_eq!(LocationReading::new(45.5, -9.25, None).short(), "45.5000, -9.2500");
}

#[test]
fn test_best_effort_providers() {
    assert_eq!(NoLocation.request_permission(), Permission::Denied);
    assert_eq!(best_effort(&mut NoLocation), None);

    let fix = LocationReading::new(1.5, 2.5, Some(3.0));
    assert_eq!(best_effort(&mut FixedLocation(fix)), Some(fix));

    let mut boxed: Box<dyn LocationProvider> = Box::new(FixedLocation(fix));
    assert_eq!(best_effort(&mut boxed), Some(fix));
}

#[test]
fn test_empty_command_is_denied() {
    let mut provider = CommandLocation::new("  ");
    assert_eq!(provider.request_permission(), Permission::Denied);
    assert_eq!(best_effort(&mut provider), None);
}

#[cfg(unix)]
#[test]
fn test_command_location_reads_stdout() {
    let mut provider = CommandLocation::new("echo 45.5,9.25,12");
    assert_eq!(
        best_effort(&mut provider),
        Some(LocationReading::new(45.5, 9.25, Some(12.0)))
    );
}

#[cfg(unix)]
#[test]
fn test_command_location_failure_is_unavailable() {
    assert_eq!(best_effort(&mut CommandLocation::new("exit 3")), None);
    assert_eq!(best_effort(&mut CommandLocation::new("echo garbage")), None);
}
