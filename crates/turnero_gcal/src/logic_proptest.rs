#[cfg(test)]
mod tests {
    use crate::catalog;
    use crate::logic::compute_window;
    use chrono_tz::America::Argentina::Buenos_Aires;
    use proptest::prelude::*;

    const KNOWN_SERVICES: [&str; 3] = ["solo-barba", "solo-corte", "barba-corte"];

    proptest! {
        // The window length always equals the catalog duration, for any
        // valid date/time and any known service.
        #[test]
        fn test_window_length_matches_catalog_duration(
            service_idx in 0..KNOWN_SERVICES.len(),
            year in 2024..2030i32,
            month in 1..=12u32,
            day in 1..=28u32,
            hour in 0..24u32,
            minute in 0..60u32,
        ) {
            let service_id = KNOWN_SERVICES[service_idx];
            let date = format!("{:04}-{:02}-{:02}", year, month, day);
            let time = format!("{:02}:{:02}", hour, minute);

            let window = compute_window(&date, &time, service_id, Buenos_Aires).unwrap();
            let expected = catalog::lookup(service_id).duration_minutes;

            prop_assert_eq!((window.end - window.start).num_minutes(), expected);
            prop_assert!(window.end > window.start);
        }

        // Unknown identifiers still yield a well-formed window via the
        // 60-minute fallback.
        #[test]
        fn test_window_for_unknown_service_uses_fallback(
            suffix in "[a-z]{1,12}",
            hour in 0..24u32,
        ) {
            let service_id = format!("unknown-{}", suffix);
            let time = format!("{:02}:00", hour);

            let window = compute_window("2025-06-10", &time, &service_id, Buenos_Aires).unwrap();

            prop_assert_eq!(
                (window.end - window.start).num_minutes(),
                catalog::FALLBACK_DURATION_MINUTES
            );
        }
    }
}
