// =============================================================================
// Talevo Web - Demo Positions
// =============================================================================
// Shown when the CRM listing cannot be reached, so the board is never blank.
// =============================================================================

use chrono::Utc;

use crate::api::Position;

struct DemoPosition {
    id: &'static str,
    title: &'static str,
    company: &'static str,
    department: &'static str,
    location: &'static str,
    experience: &'static str,
    urgency: &'static str,
    skills: &'static str,
    description: &'static str,
}

const DEMO_POSITIONS: [DemoPosition; 4] = [
    DemoPosition {
        id: "1",
        title: "Senior Yazılım Mühendisi",
        company: "Teknoloji A.Ş.",
        department: "Teknoloji",
        location: "İstanbul",
        experience: "Kıdemli (5+ yıl)",
        urgency: "high",
        skills: "Python, Django, PostgreSQL, Docker",
        description: "Backend development pozisyonu",
    },
    DemoPosition {
        id: "2",
        title: "İnsan Kaynakları Uzmanı",
        company: "Üretim Ltd.",
        department: "İnsan Kaynakları",
        location: "Ankara",
        experience: "Orta (3-5 yıl)",
        urgency: "medium",
        skills: "İK Süreçleri, SAP HR, İş Hukuku",
        description: "İK operasyonları pozisyonu",
    },
    DemoPosition {
        id: "3",
        title: "Finans Müdürü",
        company: "Holding A.Ş.",
        department: "Finans",
        location: "İstanbul",
        experience: "Direktör (10+ yıl)",
        urgency: "high",
        skills: "IFRS, Bütçe Yönetimi, SAP FI, Excel",
        description: "Finans departmanı yönetimi",
    },
    DemoPosition {
        id: "4",
        title: "Dijital Pazarlama Uzmanı",
        company: "E-Ticaret A.Ş.",
        department: "Pazarlama",
        location: "İzmir",
        experience: "Başlangıç (0-2 yıl)",
        urgency: "low",
        skills: "Google Ads, Meta Ads, SEO, Analytics",
        description: "Dijital pazarlama pozisyonu",
    },
];

/// The fixed fallback list, stamped with the current time.
pub fn demo_positions() -> Vec<Position> {
    let now = Utc::now().to_rfc3339();

    DEMO_POSITIONS
        .iter()
        .map(|demo| Position {
            id: Some(demo.id.to_string()),
            uuid: Some(format!("demo-{}", demo.id)),
            title: demo.title.to_string(),
            company_name: Some(demo.company.to_string()),
            department: Some(demo.department.to_string()),
            location: Some(demo.location.to_string()),
            experience_level: Some(demo.experience.to_string()),
            urgency: Some(demo.urgency.to_string()),
            required_skills: Some(demo.skills.to_string()),
            skills: None,
            created_at: Some(now.clone()),
            description: Some(demo.description.to_string()),
        })
        .collect()
}
