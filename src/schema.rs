table! {
    blocked_slots (id) {
        id -> Unsigned<Bigint>,
        date -> Date,
        start_time -> Time,
        reason -> Nullable<Varchar>,
        created_at -> Datetime,
    }
}

table! {
    bookings (id) {
        id -> Unsigned<Bigint>,
        customer_name -> Varchar,
        telephone -> Varchar,
        services -> Varchar,
        date -> Date,
        start_time -> Time,
        price -> Double,
        status -> Varchar,
        created_at -> Datetime,
    }
}

table! {
    schedule_configs (id) {
        id -> Unsigned<Bigint>,
        config_type -> Varchar,
        weekday -> Nullable<Integer>,
        specific_date -> Nullable<Date>,
        open_time -> Time,
        close_time -> Time,
        has_lunch_break -> Bool,
        lunch_start -> Nullable<Time>,
        lunch_end -> Nullable<Time>,
        active -> Bool,
        created_at -> Datetime,
        updated_at -> Datetime,
    }
}

table! {
    services (id) {
        id -> Unsigned<Bigint>,
        name -> Varchar,
        price -> Double,
        duration_minutes -> Integer,
        active -> Bool,
        created_at -> Datetime,
        updated_at -> Datetime,
    }
}

allow_tables_to_appear_in_same_query!(blocked_slots, bookings, schedule_configs, services,);
