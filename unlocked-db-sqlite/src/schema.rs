// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

table! {
    cities (id) {
        id -> BigInt,
        place_id -> Nullable<Text>,
        address -> Text,
        locality -> Nullable<Text>,
        administrative_area -> Nullable<Text>,
        country -> Nullable<Text>,
        latitude -> Nullable<Double>,
        longitude -> Nullable<Double>,
        viewport_sw_lat -> Nullable<Double>,
        viewport_sw_lng -> Nullable<Double>,
        viewport_ne_lat -> Nullable<Double>,
        viewport_ne_lng -> Nullable<Double>,
        formatted_address -> Nullable<Text>,
        area_km2 -> Nullable<Double>,
        population -> Nullable<BigInt>,
        elevation_m -> Nullable<Double>,
        unlocked_at -> BigInt,
        notes -> Nullable<Text>,
    }
}
