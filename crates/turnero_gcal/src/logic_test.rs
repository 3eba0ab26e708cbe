#[cfg(test)]
mod tests {
    use crate::catalog;
    use crate::logic::{check_availability, compute_window, submit_booking, BookingError, BookingRequest};
    use crate::service::mock::MockCalendarService;
    use chrono::{TimeZone, Timelike, Utc};
    use chrono_tz::America::Argentina::Buenos_Aires;

    fn request(service: &str, date: &str, time: &str) -> BookingRequest {
        BookingRequest {
            service: service.to_string(),
            barber: None,
            date: date.to_string(),
            time: time.to_string(),
            customer_name: "Ana".to_string(),
            customer_phone: "+54 11 5555-0000".to_string(),
            customer_email: "ana@x.com".to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_catalog_known_services() {
        assert_eq!(catalog::lookup("solo-barba").duration_minutes, 30);
        assert_eq!(catalog::lookup("solo-corte").duration_minutes, 45);
        assert_eq!(catalog::lookup("barba-corte").duration_minutes, 75);
        assert_eq!(catalog::lookup("solo-barba").display_name, "Solo Barba");
        assert!(catalog::is_known("barba-corte"));
    }

    #[test]
    fn test_catalog_unknown_service_falls_back() {
        let def = catalog::lookup("corte-vip");
        assert_eq!(def.duration_minutes, catalog::FALLBACK_DURATION_MINUTES);
        assert_eq!(def.display_name, "corte-vip");
        assert!(!catalog::is_known("corte-vip"));
    }

    #[test]
    fn test_compute_window_length_and_local_time() {
        let window = compute_window("2025-06-10", "09:00", "solo-barba", Buenos_Aires).unwrap();
        assert_eq!(window.start.hour(), 9);
        assert_eq!(window.start.minute(), 0);
        assert_eq!((window.end - window.start).num_minutes(), 30);
        // Buenos Aires is UTC-3 year round
        assert_eq!(window.start.with_timezone(&Utc).hour(), 12);
    }

    #[test]
    fn test_compute_window_rejects_bad_date() {
        let err = compute_window("10-06-2025", "09:00", "solo-barba", Buenos_Aires).unwrap_err();
        assert!(matches!(err, BookingError::TimeParseError(_)));
    }

    #[test]
    fn test_compute_window_rejects_bad_time() {
        let err = compute_window("2025-06-10", "9 am", "solo-barba", Buenos_Aires).unwrap_err();
        assert!(matches!(err, BookingError::TimeParseError(_)));
    }

    #[tokio::test]
    async fn test_check_availability_empty_calendar() {
        let calendar = MockCalendarService::new();
        let window = compute_window("2025-06-10", "09:00", "solo-barba", Buenos_Aires).unwrap();

        assert!(check_availability(&calendar, "primary", &window).await);
        assert_eq!(calendar.list_calls(), 1);
    }

    #[tokio::test]
    async fn test_check_availability_overlap() {
        // 09:05-09:20 local is 12:05-12:20 UTC
        let busy = vec![(
            Utc.with_ymd_and_hms(2025, 6, 10, 12, 5, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 6, 10, 12, 20, 0).unwrap(),
        )];
        let calendar = MockCalendarService::with_busy(busy);
        let window = compute_window("2025-06-10", "09:00", "solo-barba", Buenos_Aires).unwrap();

        assert!(!check_availability(&calendar, "primary", &window).await);
    }

    #[tokio::test]
    async fn test_check_availability_adjacent_event_does_not_conflict() {
        // Event ends exactly when the requested window starts
        let busy = vec![(
            Utc.with_ymd_and_hms(2025, 6, 10, 11, 30, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap(),
        )];
        let calendar = MockCalendarService::with_busy(busy);
        let window = compute_window("2025-06-10", "09:00", "solo-barba", Buenos_Aires).unwrap();

        assert!(check_availability(&calendar, "primary", &window).await);
    }

    #[tokio::test]
    async fn test_check_availability_fails_closed_on_gateway_error() {
        let calendar = MockCalendarService::failing();
        let window = compute_window("2025-06-10", "09:00", "solo-barba", Buenos_Aires).unwrap();

        assert!(!check_availability(&calendar, "primary", &window).await);
    }

    #[tokio::test]
    async fn test_submit_booking_missing_field_makes_no_gateway_calls() {
        let calendar = MockCalendarService::new();
        let mut req = request("solo-barba", "2025-06-10", "09:00");
        req.customer_email = String::new();

        let err = submit_booking(&calendar, "primary", Buenos_Aires, &req)
            .await
            .unwrap_err();

        assert!(matches!(err, BookingError::MissingFields));
        assert_eq!(calendar.list_calls(), 0);
        assert_eq!(calendar.insert_calls(), 0);
    }

    #[tokio::test]
    async fn test_submit_booking_conflict_skips_insert() {
        let busy = vec![(
            Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 6, 10, 12, 45, 0).unwrap(),
        )];
        let calendar = MockCalendarService::with_busy(busy);
        let req = request("solo-barba", "2025-06-10", "09:00");

        let err = submit_booking(&calendar, "primary", Buenos_Aires, &req)
            .await
            .unwrap_err();

        assert!(matches!(err, BookingError::Conflict));
        assert_eq!(calendar.insert_calls(), 0);
    }

    #[tokio::test]
    async fn test_submit_booking_gateway_error_reads_as_conflict() {
        let calendar = MockCalendarService::failing();
        let req = request("solo-barba", "2025-06-10", "09:00");

        let err = submit_booking(&calendar, "primary", Buenos_Aires, &req)
            .await
            .unwrap_err();

        // Fail-closed: a listing failure must surface as an unavailable
        // slot, never reach the insert step.
        assert!(matches!(err, BookingError::Conflict));
        assert_eq!(calendar.insert_calls(), 0);
    }

    #[tokio::test]
    async fn test_submit_booking_insert_failure_is_api_error() {
        let calendar = MockCalendarService::failing_insert();
        let req = request("solo-barba", "2025-06-10", "09:00");

        let err = submit_booking(&calendar, "primary", Buenos_Aires, &req)
            .await
            .unwrap_err();

        assert!(matches!(err, BookingError::ApiError(_)));
        assert_eq!(calendar.insert_calls(), 1);
    }

    #[tokio::test]
    async fn test_submit_booking_success_creates_event() {
        let calendar = MockCalendarService::new();
        let mut req = request("solo-barba", "2025-06-10", "09:00");
        req.notes = Some("Primera visita".to_string());

        let created = submit_booking(&calendar, "primary", Buenos_Aires, &req)
            .await
            .unwrap();

        assert!(created.event_id.is_some());
        assert!(!created.event_id.unwrap().is_empty());
        assert!(created.html_link.is_some());
        assert_eq!(calendar.list_calls(), 1);
        assert_eq!(calendar.insert_calls(), 1);

        let inserted = calendar.inserted();
        let (event, notify) = &inserted[0];
        assert!(*notify, "attendees must be notified on creation");
        assert_eq!(event.summary, "Solo Barba - Ana");
        assert_eq!(event.start_time, "2025-06-10T09:00:00-03:00");
        assert_eq!(event.end_time, "2025-06-10T09:30:00-03:00");
        assert_eq!(event.time_zone, "America/Argentina/Buenos_Aires");
        assert_eq!(event.attendee_email.as_deref(), Some("ana@x.com"));
        assert_eq!(event.color_id.as_deref(), Some("5"));

        let description = event.description.as_deref().unwrap();
        assert!(description.contains("Servicio: Solo Barba"));
        assert!(description.contains("Cliente: Ana"));
        assert!(description.contains("Teléfono: +54 11 5555-0000"));
        assert!(description.contains("Email: ana@x.com"));
        assert!(description.contains("Notas: Primera visita"));

        assert_eq!(event.reminders.len(), 2);
        assert_eq!(event.reminders[0].method, "email");
        assert_eq!(event.reminders[0].minutes, 24 * 60);
        assert_eq!(event.reminders[1].method, "popup");
        assert_eq!(event.reminders[1].minutes, 60);
    }

    #[tokio::test]
    async fn test_submit_booking_ignores_barber_field() {
        let calendar = MockCalendarService::new();
        let mut req = request("solo-corte", "2025-06-10", "14:00");
        req.barber = Some("cualquiera".to_string());

        let created = submit_booking(&calendar, "primary", Buenos_Aires, &req)
            .await
            .unwrap();

        assert!(created.event_id.is_some());
        let inserted = calendar.inserted();
        let description = inserted[0].0.description.as_deref().unwrap();
        assert!(!description.contains("cualquiera"));
    }
}
