// File: crates/turnero_gcal/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use crate::logic::{BookingRequest, BookingResponse};
use utoipa::OpenApi;

#[utoipa::path(
    post,
    path = "/booking",
    request_body(content = BookingRequest, example = json!({
        "service": "solo-barba",
        "date": "2025-06-10",
        "time": "09:00",
        "customerName": "Ana",
        "customerPhone": "+54 11 5555-0000",
        "customerEmail": "ana@example.com",
        "notes": "Primera visita"
    })),
    responses(
        (status = 200, description = "Booking created", body = BookingResponse,
         example = json!({
             "success": true,
             "event_id": "abc123xyz456",
             "event_link": "https://www.google.com/calendar/event?eid=abc123",
             "message": "Appointment booked successfully."
         })
        ),
        (status = 400, description = "Missing or malformed input", body = String),
        (status = 409, description = "Slot no longer available", body = String),
        (status = 500, description = "Calendar backend failure", body = String)
    )
)]
fn doc_book_appointment_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_book_appointment_handler),
    components(schemas(BookingRequest, BookingResponse)),
    tags((name = "Booking", description = "Barbershop appointment booking endpoints"))
)]
pub struct BookingApiDoc;
