use serde_json::{json, Value};

/// Helper function to build a server response for a plan with the given entries
pub fn plan_response(id: u64, entries: Value) -> Value {
    json!({
        "id": id,
        "name": format!("Plan {id}"),
        "description": null,
        "milestone_id": null,
        "created_by": 2,
        "created_on": 1700000000,
        "is_completed": true,
        "completed_on": 1700086400,
        "passed_count": 10,
        "blocked_count": 1,
        "untested_count": 0,
        "retest_count": 0,
        "failed_count": 1,
        "custom_status1_count": 0,
        "custom_status2_count": 0,
        "custom_status3_count": 0,
        "custom_status4_count": 0,
        "custom_status5_count": 0,
        "custom_status6_count": 0,
        "custom_status7_count": 0,
        "project_id": 3,
        "assignedto_id": 5,
        "url": format!("https://example.testrail.io/index.php?/plans/view/{id}"),
        "entries": entries
    })
}
