//! Admin registry - in-memory CRUD for the dashboard
//!
//! Users, courses, and analytics live in plain vectors behind RwLocks, the
//! backend counterpart of the dashboard's local component state. Nothing is
//! persisted; the registry reseeds its demo users on every start.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub farm_size: String,
    pub location: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub difficulty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_playlist_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analytic {
    pub id: i64,
    pub metric: String,
    pub value: f64,
    pub period: String,
    pub trend: String,
}

/// Create/update payloads: same fields, no id.
#[derive(Debug, Clone, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub farm_size: String,
    pub location: String,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "active".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub difficulty: String,
    #[serde(default)]
    pub youtube_playlist_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticDraft {
    pub metric: String,
    pub value: f64,
    pub period: String,
    pub trend: String,
}

pub struct AdminRegistry {
    users: RwLock<Vec<User>>,
    courses: RwLock<Vec<Course>>,
    analytics: RwLock<Vec<Analytic>>,
    next_user_id: AtomicI64,
    next_course_id: AtomicI64,
    next_analytic_id: AtomicI64,
}

impl AdminRegistry {
    /// Fresh registry with the demo farmer accounts seeded.
    pub fn new() -> Self {
        let users = vec![
            User {
                id: 1,
                name: "John Farmer".into(),
                email: "john@farm.com".into(),
                farm_size: "50 acres".into(),
                location: "California".into(),
                status: "active".into(),
            },
            User {
                id: 2,
                name: "Sarah Green".into(),
                email: "sarah@green.com".into(),
                farm_size: "25 acres".into(),
                location: "Texas".into(),
                status: "active".into(),
            },
            User {
                id: 3,
                name: "Mike Plant".into(),
                email: "mike@plant.com".into(),
                farm_size: "100 acres".into(),
                location: "Iowa".into(),
                status: "active".into(),
            },
        ];

        Self {
            next_user_id: AtomicI64::new(users.len() as i64 + 1),
            users: RwLock::new(users),
            courses: RwLock::new(Vec::new()),
            analytics: RwLock::new(Vec::new()),
            next_course_id: AtomicI64::new(1),
            next_analytic_id: AtomicI64::new(1),
        }
    }

    // ── Users

    pub async fn list_users(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    pub async fn create_user(&self, draft: UserDraft) -> User {
        let user = User {
            id: self.next_user_id.fetch_add(1, Ordering::Relaxed),
            name: draft.name,
            email: draft.email,
            farm_size: draft.farm_size,
            location: draft.location,
            status: draft.status,
        };
        self.users.write().await.push(user.clone());
        user
    }

    pub async fn update_user(&self, id: i64, draft: UserDraft) -> Option<User> {
        let mut users = self.users.write().await;
        let user = users.iter_mut().find(|u| u.id == id)?;
        user.name = draft.name;
        user.email = draft.email;
        user.farm_size = draft.farm_size;
        user.location = draft.location;
        user.status = draft.status;
        Some(user.clone())
    }

    pub async fn delete_user(&self, id: i64) -> bool {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id != id);
        users.len() != before
    }

    // ── Courses

    pub async fn list_courses(&self) -> Vec<Course> {
        self.courses.read().await.clone()
    }

    pub async fn create_course(&self, draft: CourseDraft) -> Course {
        let course = Course {
            id: self.next_course_id.fetch_add(1, Ordering::Relaxed),
            title: draft.title,
            description: draft.description,
            duration: draft.duration,
            difficulty: draft.difficulty,
            youtube_playlist_url: draft.youtube_playlist_url,
        };
        self.courses.write().await.push(course.clone());
        course
    }

    pub async fn update_course(&self, id: i64, draft: CourseDraft) -> Option<Course> {
        let mut courses = self.courses.write().await;
        let course = courses.iter_mut().find(|c| c.id == id)?;
        course.title = draft.title;
        course.description = draft.description;
        course.duration = draft.duration;
        course.difficulty = draft.difficulty;
        course.youtube_playlist_url = draft.youtube_playlist_url;
        Some(course.clone())
    }

    pub async fn delete_course(&self, id: i64) -> bool {
        let mut courses = self.courses.write().await;
        let before = courses.len();
        courses.retain(|c| c.id != id);
        courses.len() != before
    }

    // ── Analytics

    pub async fn list_analytics(&self) -> Vec<Analytic> {
        self.analytics.read().await.clone()
    }

    pub async fn create_analytic(&self, draft: AnalyticDraft) -> Analytic {
        let analytic = Analytic {
            id: self.next_analytic_id.fetch_add(1, Ordering::Relaxed),
            metric: draft.metric,
            value: draft.value,
            period: draft.period,
            trend: draft.trend,
        };
        self.analytics.write().await.push(analytic.clone());
        analytic
    }

    pub async fn update_analytic(&self, id: i64, draft: AnalyticDraft) -> Option<Analytic> {
        let mut analytics = self.analytics.write().await;
        let analytic = analytics.iter_mut().find(|a| a.id == id)?;
        analytic.metric = draft.metric;
        analytic.value = draft.value;
        analytic.period = draft.period;
        analytic.trend = draft.trend;
        Some(analytic.clone())
    }

    pub async fn delete_analytic(&self, id: i64) -> bool {
        let mut analytics = self.analytics.write().await;
        let before = analytics.len();
        analytics.retain(|a| a.id != id);
        analytics.len() != before
    }
}

impl Default for AdminRegistry {
    fn default() -> Self {
        Self::new()
    }
}
