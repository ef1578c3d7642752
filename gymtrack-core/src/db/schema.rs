// Column names follow the app's camelCase layout; Rust-side names are snake_case.

diesel::table! {
    exercise (id) {
        id -> Integer,
        name -> Text,
        description -> Text,
        instructions -> Text,
        tip -> Text,
        #[sql_name = "externalId"]
        external_id -> Nullable<Text>,
        #[sql_name = "hasWeight"]
        has_weight -> Bool,
        #[sql_name = "counterUnit"]
        counter_unit -> Text,
        #[sql_name = "defaultValue"]
        default_value -> Integer,
        #[sql_name = "isDailyChallenge"]
        is_daily_challenge -> Bool,
        level -> Nullable<Text>,
        category -> Nullable<Text>,
        force -> Nullable<Text>,
        mechanic -> Nullable<Text>,
        equipment -> Nullable<Text>,
        #[sql_name = "primaryMuscles"]
        primary_muscles -> Nullable<Text>,
        #[sql_name = "secondaryMuscles"]
        secondary_muscles -> Nullable<Text>,
    }
}

diesel::table! {
    workout (id) {
        id -> Integer,
        name -> Text,
        description -> Text,
    }
}

diesel::table! {
    #[sql_name = "workoutExercise"]
    workout_exercise (id) {
        id -> Integer,
        #[sql_name = "workoutId"]
        workout_id -> Integer,
        #[sql_name = "exerciseId"]
        exercise_id -> Integer,
        position -> Integer,
        #[sql_name = "counterUnit"]
        counter_unit -> Text,
        #[sql_name = "counterValue"]
        counter_value -> Nullable<Integer>,
        #[sql_name = "counterLabel"]
        counter_label -> Nullable<Text>,
        #[sql_name = "restSeconds"]
        rest_seconds -> Integer,
        sets -> Integer,
        #[sql_name = "isDailyChallenge"]
        is_daily_challenge -> Bool,
        #[sql_name = "hasWeight"]
        has_weight -> Bool,
        #[sql_name = "isActive"]
        is_active -> Bool,
    }
}

diesel::joinable!(workout_exercise -> exercise (exercise_id));
diesel::joinable!(workout_exercise -> workout (workout_id));

diesel::allow_tables_to_appear_in_same_query!(exercise, workout, workout_exercise,);
