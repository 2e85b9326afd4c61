use axum::{extract::Query, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Wire shape of one activity, exactly as the live service serves it.
/// `key` is a string on the wire even though it holds a number.
#[derive(Clone, Debug, Serialize)]
pub struct Activity {
    pub activity: String,
    pub accessibility: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub participants: u32,
    pub price: f64,
    pub key: String,
    pub link: String,
}

/// Query filters the endpoint understands. Key spellings have underscores
/// collapsed (`mincost`, `maxaccessibility`), matching the live service.
#[derive(Debug, Default, Deserialize)]
pub struct ActivityFilter {
    pub id: Option<i64>,
    pub category: Option<String>,
    pub participants: Option<u32>,
    pub cost: Option<f64>,
    pub mincost: Option<f64>,
    pub maxcost: Option<f64>,
    pub accessibility: Option<f64>,
    pub minaccessibility: Option<f64>,
    pub maxaccessibility: Option<f64>,
}

impl ActivityFilter {
    fn matches(&self, activity: &Activity) -> bool {
        if let Some(id) = self.id {
            if activity.key != id.to_string() {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if !activity.kind.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(participants) = self.participants {
            if activity.participants != participants {
                return false;
            }
        }
        if let Some(cost) = self.cost {
            if activity.price != cost {
                return false;
            }
        }
        if let Some(mincost) = self.mincost {
            if activity.price < mincost {
                return false;
            }
        }
        if let Some(maxcost) = self.maxcost {
            if activity.price > maxcost {
                return false;
            }
        }
        if let Some(accessibility) = self.accessibility {
            if activity.accessibility != accessibility {
                return false;
            }
        }
        if let Some(minaccessibility) = self.minaccessibility {
            if activity.accessibility < minaccessibility {
                return false;
            }
        }
        if let Some(maxaccessibility) = self.maxaccessibility {
            if activity.accessibility > maxaccessibility {
                return false;
            }
        }
        true
    }
}

/// Response body: an activity, or the service's error envelope.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ActivityReply {
    Found(Activity),
    Error { error: String },
}

/// Fixed catalog covering every category. Selection is deterministic
/// (first match wins) so tests can assert exact results.
pub fn catalog() -> Vec<Activity> {
    fn entry(
        activity: &str,
        accessibility: f64,
        kind: &str,
        participants: u32,
        price: f64,
        key: &str,
        link: &str,
    ) -> Activity {
        Activity {
            activity: activity.to_string(),
            accessibility,
            kind: kind.to_string(),
            participants,
            price,
            key: key.to_string(),
            link: link.to_string(),
        }
    }

    vec![
        entry("Learn to play chess", 0.25, "education", 2, 0.1, "3944425", ""),
        entry("Go for a run", 0.2, "recreational", 1, 0.0, "8836024", ""),
        entry(
            "Have a picnic with some friends",
            0.3,
            "social",
            4,
            0.3,
            "1934228",
            "",
        ),
        entry(
            "Build a birdhouse",
            0.4,
            "diy",
            1,
            0.45,
            "5210073",
            "https://en.wikipedia.org/wiki/Birdhouse",
        ),
        entry(
            "Volunteer at an animal shelter",
            0.5,
            "charity",
            1,
            0.0,
            "2896176",
            "",
        ),
        entry("Bake a loaf of bread", 0.35, "cooking", 1, 0.4, "6081071", ""),
        entry("Take a hot bath", 0.1, "relaxation", 1, 0.2, "7724261", ""),
        entry("Practice the guitar", 0.6, "music", 1, 0.7, "4387026", ""),
        entry("Organize your desk drawers", 0.15, "busywork", 1, 0.0, "9021852", ""),
    ]
}

pub fn app() -> Router {
    Router::new().route("/api/activity", get(find_activity))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn find_activity(Query(filter): Query<ActivityFilter>) -> Json<ActivityReply> {
    let reply = catalog()
        .into_iter()
        .find(|activity| filter.matches(activity))
        .map_or_else(
            || ActivityReply::Error {
                error: "No activity found with the specified parameters".to_string(),
            },
            ActivityReply::Found,
        );
    Json(reply)
}
