//! Built-in settings route table
//!
//! Items without an entry here open the fallback dialog. Entries created with
//! `RouteEntry::dialog` only document that the fallback is deliberate.

use crate::types::RouteEntry;

pub(crate) const BUILTIN_ROUTES: &[RouteEntry] = &[
    // general
    RouteEntry::page("general", "Hotel Information", "/settings/general"),
    RouteEntry::page("general", "Localization", "/settings/localization"),
    // booking
    RouteEntry::page("booking", "Booking Rules", "/settings/booking-rules"),
    RouteEntry::page("booking", "Cancellation Policy", "/settings/cancellation-policy"),
    // rooms
    RouteEntry::page("rooms", "Room Types", "/settings/room-types"),
    RouteEntry::page("rooms", "Amenities", "/settings/amenities"),
    RouteEntry::dialog("rooms", "Housekeeping"),
    // security
    RouteEntry::page("security", "User Roles", "/settings/user-roles"),
    RouteEntry::page("security", "Password Policy", "/settings/security"),
    // notifications
    RouteEntry::page("notifications", "Email Templates", "/settings/email-templates"),
    // integrations
    RouteEntry::page("integrations", "Payment Gateways", "/settings/payment-gateways"),
];
