use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["triptide"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn explore_filters_default_to_all() {
    let cli = Cli::try_parse_from(["triptide", "explore"]).expect("expected valid cli args");
    let Some(Commands::Explore { filters }) = cli.command else {
        panic!("expected explore command");
    };
    assert_eq!(filters.criteria().unwrap(), FilterCriteria::default());
}

#[test]
fn explore_accepts_all_filter_flags() {
    let cli = Cli::try_parse_from([
        "triptide", "explore", "--price", "100-200", "--rating", "4", "--type", "Hotel",
        "--amenity", "WiFi", "--sort", "price_asc",
    ])
    .expect("expected valid cli args");
    let Some(Commands::Explore { filters }) = cli.command else {
        panic!("expected explore command");
    };
    let criteria = filters.criteria().unwrap();
    assert_eq!(criteria.stay_type.as_deref(), Some("Hotel"));
    assert_eq!(criteria.amenity.as_deref(), Some("WiFi"));
    assert_eq!(criteria.sort, triptide_core::SortKey::PriceAsc);
}

#[test]
fn malformed_price_range_is_an_error() {
    let cli = Cli::try_parse_from(["triptide", "explore", "--price", "cheap"])
        .expect("clap accepts any string");
    let Some(Commands::Explore { filters }) = cli.command else {
        panic!("expected explore command");
    };
    assert!(filters.criteria().is_err());
}

#[test]
fn destination_takes_place_and_filters() {
    let cli = Cli::try_parse_from(["triptide", "destination", "goa", "--rating", "4.5"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Destination { ref place, ref filters }) if place == "goa" && filters.rating == "4.5"
    ));
}

#[test]
fn similar_from_explore_flag() {
    let cli = Cli::try_parse_from(["triptide", "similar", "goa", "--from-explore"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Similar { ref destination, from_explore: true }) if destination == "goa"
    ));
}

#[test]
fn profile_increment_takes_metric_name() {
    let cli = Cli::try_parse_from(["triptide", "profile", "increment", "searches"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Profile {
            command: ProfileCommands::Increment { ref name }
        }) if name == "searches"
    ));
}

#[test]
fn survey_accepts_zero_as_unanswered() {
    let cli = Cli::try_parse_from(["triptide", "survey", "5", "4", "0", "3", "2"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Survey { q1: 5, q3: 0, q5: 2, .. })
    ));
}

#[test]
fn survey_rejects_scores_above_five() {
    let result = Cli::try_parse_from(["triptide", "survey", "5", "6", "5", "5", "5"]);
    assert!(result.is_err());
}

#[test]
fn plan_defaults_traveler_type() {
    let cli = Cli::try_parse_from(["triptide", "plan", "goa", "3"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Plan { ref traveler_type, ref interests, .. })
            if traveler_type == "Solo" && interests.is_empty()
    ));
}

#[test]
fn onboarding_defaults_to_three_slides_without_ticks() {
    let cli = Cli::try_parse_from(["triptide", "onboarding"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Onboarding {
            slides: 3,
            start: 0,
            ticks: 0
        })
    ));
}

#[test]
fn help_does_not_need_configuration() {
    let err = Cli::try_parse_from(["triptide", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}
