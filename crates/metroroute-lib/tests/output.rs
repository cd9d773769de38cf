mod common;

use common::two_line_graph;
use metroroute_lib::{
    plan_route, EdgeKind, Error, RouteMode, RoutePlan, RouteRenderMode, RouteRequest,
    RouteSummary,
};

fn summary(mode: RouteMode, start: &str, goal: &str) -> RouteSummary {
    let graph = two_line_graph();
    let plan = plan_route(&graph, &RouteRequest::new(start, goal, mode)).expect("route exists");
    RouteSummary::from_plan(&graph, &plan).expect("summary builds")
}

#[test]
fn plain_distance_report_matches_legacy_layout() {
    let text = summary(RouteMode::ShortestDistance, "1", "3").render(RouteRenderMode::PlainText);
    assert_eq!(
        text,
        "Shortest distance: 12.00 km\n\
         Fare: Rs 30/-\n\
         Path: A (Line 1) -> B [Conn: Line 2] (Line 1) -> C (Line 1)\n"
    );
}

#[test]
fn plain_fare_report_names_the_mode() {
    let text = summary(RouteMode::MinimumFare, "1", "3").render(RouteRenderMode::PlainText);
    assert!(text.starts_with("Minimum fare route distance: 12.00 km\n"));
}

#[test]
fn plain_interchange_report_lists_changes_first() {
    let text =
        summary(RouteMode::MinimumInterchanges, "1", "5").render(RouteRenderMode::PlainText);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Minimum line interchanges: 1");
    assert_eq!(lines[1], "Total distance: 9.00 km");
    assert_eq!(lines[2], "Fare: Rs 30/-");
    assert!(lines[3].contains("B [Conn: Line 2] (Line 1) -> B (Line 2) -> D (Line 2)"));
}

#[test]
fn steps_carry_leg_details() {
    let summary = summary(RouteMode::MinimumInterchanges, "1", "5");
    assert_eq!(summary.hops, 3);
    assert_eq!(summary.start().id, 1);
    assert_eq!(summary.goal().id, 5);

    assert_eq!(summary.steps[0].distance, None);
    assert_eq!(summary.steps[0].via, None);
    assert_eq!(summary.steps[1].distance, Some(5.0));
    assert_eq!(summary.steps[1].via, Some(EdgeKind::SameLine));
    assert_eq!(summary.steps[2].via, Some(EdgeKind::Interchange));
    assert_eq!(summary.steps[3].line.as_deref(), Some("Line 2"));
}

#[test]
fn rich_render_marks_interchanges() {
    let text =
        summary(RouteMode::MinimumInterchanges, "1", "5").render(RouteRenderMode::RichText);
    assert!(text.starts_with("**Minimum interchanges**"));
    assert!(text.contains("**B** (`4`, Line 2) [interchange]"));
    assert!(text.contains("**B [Conn: Line 2]** (`2`, Line 1) +5.00 km"));
}

#[test]
fn summary_serialises_without_empty_leg_fields() {
    let summary = summary(RouteMode::ShortestDistance, "1", "3");
    let json = serde_json::to_value(&summary).expect("serialise");
    assert_eq!(json["mode"], "shortest_distance");
    assert_eq!(json["fare"], 30);
    assert!(json["steps"][0].get("via").is_none());
    assert_eq!(json["steps"][1]["via"], "same_line");
}

#[test]
fn empty_plan_is_rejected() {
    let graph = two_line_graph();
    let plan = RoutePlan {
        mode: RouteMode::ShortestDistance,
        start: 1,
        goal: 1,
        steps: Vec::new(),
        cost: f64::INFINITY,
        distance: 0.0,
        interchanges: 0,
        fare: 10,
    };
    let err = RouteSummary::from_plan(&graph, &plan).expect_err("empty plan");
    assert!(matches!(err, Error::EmptyRoutePlan));
}
