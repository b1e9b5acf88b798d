//! Built-in settings sections

/// (id, title, description, icon, items as (title, description))
type SectionDef = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static [(&'static str, &'static str)],
);

pub(crate) const BUILTIN_SECTIONS: &[SectionDef] = &[
    (
        "general",
        "General",
        "Property details and regional preferences",
        "⌂",
        &[
            ("Hotel Information", "Name, address and contact details of the property"),
            ("Localization", "Language, currency, time zone and date format"),
            ("Branding", "Logo, colors and guest-facing documents"),
        ],
    ),
    (
        "booking",
        "Booking",
        "Reservation rules and policies",
        "▦",
        &[
            ("Booking Rules", "Check-in and check-out times, minimum stay, overbooking"),
            ("Cancellation Policy", "Free cancellation windows and penalties"),
            ("Deposits", "Deposit amounts and payment deadlines"),
        ],
    ),
    (
        "rooms",
        "Rooms",
        "Room inventory and housekeeping",
        "▣",
        &[
            ("Room Types", "Categories, capacity and base rates"),
            ("Amenities", "Amenities offered per room type"),
            ("Housekeeping", "Cleaning schedules and status workflow"),
        ],
    ),
    (
        "security",
        "Security",
        "Staff access and authentication",
        "◆",
        &[
            ("User Roles", "Roles and permissions for staff accounts"),
            ("Password Policy", "Password strength and rotation rules"),
            ("Two-Factor Authentication", "Second factor requirements for staff sign-in"),
        ],
    ),
    (
        "notifications",
        "Notifications",
        "Guest and staff messaging",
        "✉",
        &[
            ("Email Templates", "Confirmation, reminder and invoice emails"),
            ("SMS Alerts", "Text message alerts for guests and staff"),
        ],
    ),
    (
        "integrations",
        "Integrations",
        "Third-party services",
        "⚙",
        &[
            ("Payment Gateways", "Card processors and payout accounts"),
            ("Channel Manager", "OTA connections and availability sync"),
        ],
    ),
];
