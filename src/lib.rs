pub mod configuration;

pub mod holidayerror;

pub mod time {
    pub mod utility;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod fixeddateholiday;
        pub mod nthweekdayholiday;
        pub mod equinoxholiday;
    }

    pub mod nationalholiday {
        pub mod nationalholiday;
        pub mod substituterule;
        pub mod holidaytype;
        pub mod holidaynames;
        pub mod holidaybundle;
        pub mod citizensholiday;
    }

    pub mod calendar {
        pub mod monthholidays;
        pub mod yearcalendar;
    }
}
