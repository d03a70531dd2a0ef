//! Built-in demonstration dataset
//!
//! The dashboard ships with a fixed snapshot of a West-African threat
//! landscape. The collections returned here are the only data the product
//! displays: there is no ingestion pipeline, and nothing mutates a record
//! after construction.

use crate::types::{
    AlertRecord, AnalysisRecord, AnalysisStatus, ChannelVolume, GeoIncidentRecord, Impact,
    IncidentRecord, IncidentStatus, IntelKind, RegionVolume, Severity, SeverityBucket, SourceKind,
    SourceRecord, SourceStatus, ThreatIntelRecord, ThreatRecord, TrendPoint,
};
use chrono::{DateTime, Utc};

fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .expect("fixture timestamps are valid RFC 3339")
}

/// Recently detected threats
pub fn threats() -> Vec<ThreatRecord> {
    vec![
        ThreatRecord {
            id: "1".to_string(),
            title: "APT Group Targeting African Banking Sector".to_string(),
            severity: Severity::Critical,
            kind: "Advanced Persistent Threat".to_string(),
            location: "Sénégal, Côte d'Ivoire".to_string(),
            timestamp: ts("2025-01-20T14:30:00Z"),
            description: "Nouveau groupe APT ciblant les institutions financières en Afrique de l'Ouest".to_string(),
        },
        ThreatRecord {
            id: "2".to_string(),
            title: "Ransomware Campaign - LockBit Variant".to_string(),
            severity: Severity::High,
            kind: "Ransomware".to_string(),
            location: "Global".to_string(),
            timestamp: ts("2025-01-20T13:15:00Z"),
            description: "Nouvelle variante de LockBit détectée ciblant les infrastructures critiques".to_string(),
        },
        ThreatRecord {
            id: "3".to_string(),
            title: "Phishing Campaign Targeting Government".to_string(),
            severity: Severity::Medium,
            kind: "Phishing".to_string(),
            location: "Sénégal".to_string(),
            timestamp: ts("2025-01-20T12:45:00Z"),
            description: "Campagne de phishing ciblant les employés gouvernementaux sénégalais".to_string(),
        },
    ]
}

/// Tracked security incidents
pub fn incidents() -> Vec<IncidentRecord> {
    vec![
        IncidentRecord {
            id: "INC-2025-001".to_string(),
            title: "Compromission Infrastructure Bancaire".to_string(),
            description: "Détection d'activités suspectes sur les serveurs de la Banque Centrale du Sénégal".to_string(),
            severity: Severity::Critical,
            status: IncidentStatus::Investigating,
            kind: "Data Breach".to_string(),
            affected: vec!["Banque Centrale".to_string(), "Système SWIFT".to_string()],
            reporter: "CERT-SN".to_string(),
            assignee: "Équipe Réponse".to_string(),
            created_at: ts("2025-01-20T10:30:00Z"),
            updated_at: ts("2025-01-20T14:15:00Z"),
            location: "Dakar, Sénégal".to_string(),
            impact: Impact::High,
        },
        IncidentRecord {
            id: "INC-2025-002".to_string(),
            title: "Campagne Phishing Gouvernementale".to_string(),
            description: "Emails malveillants ciblant les employés du Ministère de l'Économie".to_string(),
            severity: Severity::High,
            status: IncidentStatus::Open,
            kind: "Phishing Campaign".to_string(),
            affected: vec!["Ministère Économie".to_string(), "Fonctionnaires".to_string()],
            reporter: "Employé Ministère".to_string(),
            assignee: "Analyste Junior".to_string(),
            created_at: ts("2025-01-20T09:15:00Z"),
            updated_at: ts("2025-01-20T13:45:00Z"),
            location: "Dakar, Sénégal".to_string(),
            impact: Impact::Medium,
        },
        IncidentRecord {
            id: "INC-2025-003".to_string(),
            title: "Défacement Site Web Municipal".to_string(),
            description: "Site officiel de la Mairie de Thiès défacé par des cybercriminels".to_string(),
            severity: Severity::Medium,
            status: IncidentStatus::Resolved,
            kind: "Website Defacement".to_string(),
            affected: vec!["Mairie Thiès".to_string(), "Services Citoyens".to_string()],
            reporter: "Administrateur IT".to_string(),
            assignee: "Équipe Web".to_string(),
            created_at: ts("2025-01-19T16:20:00Z"),
            updated_at: ts("2025-01-20T08:30:00Z"),
            location: "Thiès, Sénégal".to_string(),
            impact: Impact::Low,
        },
        IncidentRecord {
            id: "INC-2025-004".to_string(),
            title: "Ransomware Hôpital Principal".to_string(),
            description: "Infection ransomware paralysant les systèmes de l'Hôpital Principal de Dakar".to_string(),
            severity: Severity::Critical,
            status: IncidentStatus::Investigating,
            kind: "Ransomware".to_string(),
            affected: vec!["Hôpital Principal".to_string(), "Systèmes Médicaux".to_string()],
            reporter: "DSI Hôpital".to_string(),
            assignee: "Équipe Urgence".to_string(),
            created_at: ts("2025-01-19T22:45:00Z"),
            updated_at: ts("2025-01-20T14:00:00Z"),
            location: "Dakar, Sénégal".to_string(),
            impact: Impact::High,
        },
    ]
}

/// Intelligence collection sources
pub fn sources() -> Vec<SourceRecord> {
    vec![
        SourceRecord {
            id: "1".to_string(),
            name: "CERT Sénégal".to_string(),
            kind: SourceKind::Rss,
            url: "https://cert.sn/feeds/alerts".to_string(),
            status: SourceStatus::Active,
            last_update: ts("2025-01-20T14:30:00Z"),
            reliability: 95,
            articles_count: 234,
            category: "Gouvernemental".to_string(),
        },
        SourceRecord {
            id: "2".to_string(),
            name: "MITRE ATT&CK".to_string(),
            kind: SourceKind::Api,
            url: "https://attack.mitre.org/api".to_string(),
            status: SourceStatus::Active,
            last_update: ts("2025-01-20T14:25:00Z"),
            reliability: 98,
            articles_count: 1456,
            category: "Threat Intelligence".to_string(),
        },
        SourceRecord {
            id: "3".to_string(),
            name: "AlienVault OTX".to_string(),
            kind: SourceKind::Api,
            url: "https://otx.alienvault.com/api".to_string(),
            status: SourceStatus::Active,
            last_update: ts("2025-01-20T14:20:00Z"),
            reliability: 92,
            articles_count: 3456,
            category: "IOC Feed".to_string(),
        },
        SourceRecord {
            id: "4".to_string(),
            name: "CyberThreat Alliance".to_string(),
            kind: SourceKind::Cti,
            url: "https://cyberthreatalliance.org/feed".to_string(),
            status: SourceStatus::Error,
            last_update: ts("2025-01-20T12:15:00Z"),
            reliability: 89,
            articles_count: 567,
            category: "Industry".to_string(),
        },
        SourceRecord {
            id: "5".to_string(),
            name: "Dark Web Monitoring".to_string(),
            kind: SourceKind::Osint,
            url: "internal://darkweb-crawler".to_string(),
            status: SourceStatus::Active,
            last_update: ts("2025-01-20T14:35:00Z"),
            reliability: 75,
            articles_count: 123,
            category: "Underground".to_string(),
        },
    ]
}

/// Threat intelligence records
pub fn intel() -> Vec<ThreatIntelRecord> {
    vec![
        ThreatIntelRecord {
            id: "TI-2025-001".to_string(),
            title: "Lazarus Group - Nouvelles campagnes en Afrique".to_string(),
            kind: IntelKind::Actor,
            confidence: 85,
            severity: Severity::Critical,
            source: "MITRE ATT&CK".to_string(),
            tags: vec![
                "APT".to_string(),
                "North Korea".to_string(),
                "Banking".to_string(),
                "Africa".to_string(),
            ],
            description: "Le groupe Lazarus élargit ses opérations vers l'Afrique de l'Ouest, ciblant spécifiquement les infrastructures financières.".to_string(),
            indicators: vec![
                "192.168.1.100".to_string(),
                "lazarus-banking.exe".to_string(),
                "btc1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa".to_string(),
            ],
            mitre_attack: vec![
                "T1566.001".to_string(),
                "T1059.003".to_string(),
                "T1041".to_string(),
            ],
            created_at: ts("2025-01-20T10:00:00Z"),
            last_seen: ts("2025-01-20T14:30:00Z"),
        },
        ThreatIntelRecord {
            id: "TI-2025-002".to_string(),
            title: "LockBit 3.0 - Nouvelle variante détectée".to_string(),
            kind: IntelKind::Malware,
            confidence: 92,
            severity: Severity::High,
            source: "CyberThreat Alliance".to_string(),
            tags: vec![
                "Ransomware".to_string(),
                "LockBit".to_string(),
                "Encryption".to_string(),
            ],
            description: "Nouvelle variante de LockBit avec des capacités d'évasion améliorées et un chiffrement plus rapide.".to_string(),
            indicators: vec![
                "lockbit3.exe".to_string(),
                "C2: 45.33.32.156".to_string(),
                "mutex: LB3_MUTEX_2025".to_string(),
            ],
            mitre_attack: vec![
                "T1486".to_string(),
                "T1083".to_string(),
                "T1012".to_string(),
            ],
            created_at: ts("2025-01-19T16:20:00Z"),
            last_seen: ts("2025-01-20T13:45:00Z"),
        },
        ThreatIntelRecord {
            id: "TI-2025-003".to_string(),
            title: "Campagne Phishing - Faux Ministères".to_string(),
            kind: IntelKind::Campaign,
            confidence: 78,
            severity: Severity::Medium,
            source: "CERT-SN".to_string(),
            tags: vec![
                "Phishing".to_string(),
                "Government".to_string(),
                "Social Engineering".to_string(),
            ],
            description: "Campagne de phishing imitant les communications officielles des ministères sénégalais.".to_string(),
            indicators: vec![
                "ministere-economie-sn.com".to_string(),
                "gouv-senegal.net".to_string(),
            ],
            mitre_attack: vec!["T1566.002".to_string(), "T1204.002".to_string()],
            created_at: ts("2025-01-19T09:15:00Z"),
            last_seen: ts("2025-01-20T11:20:00Z"),
        },
    ]
}

/// Analyst reports
pub fn analyses() -> Vec<AnalysisRecord> {
    vec![
        AnalysisRecord {
            id: "ANAL-2025-001".to_string(),
            title: "Analyse Mensuelle - Menaces Cyber Sénégal".to_string(),
            analyst: "Dr. Fatou Diop".to_string(),
            status: AnalysisStatus::Published,
            threats: vec!["TI-2025-001".to_string(), "TI-2025-003".to_string()],
            summary: "Augmentation significative des attaques ciblant le secteur public sénégalais avec une sophistication croissante des techniques utilisées.".to_string(),
            recommendations: vec![
                "Renforcer la sensibilisation des employés gouvernementaux".to_string(),
                "Mettre à jour les systèmes de détection d'intrusion".to_string(),
                "Améliorer la coordination entre CERT-SN et les institutions".to_string(),
            ],
            created_at: ts("2025-01-15T14:00:00Z"),
        },
        AnalysisRecord {
            id: "ANAL-2025-002".to_string(),
            title: "Rapport Tactique - Groupe Lazarus".to_string(),
            analyst: "Amadou Ba".to_string(),
            status: AnalysisStatus::Review,
            threats: vec!["TI-2025-001".to_string()],
            summary: "Analyse détaillée des TTPs du groupe Lazarus et de leur adaptation au contexte africain.".to_string(),
            recommendations: vec![
                "Surveillance accrue des flux financiers internationaux".to_string(),
                "Partage d'IOC avec les partenaires régionaux".to_string(),
                "Formation spécialisée pour les équipes SOC".to_string(),
            ],
            created_at: ts("2025-01-18T10:30:00Z"),
        },
    ]
}

/// Geolocated incident clusters for the world map
pub fn geo_incidents() -> Vec<GeoIncidentRecord> {
    vec![
        GeoIncidentRecord {
            id: "1".to_string(),
            country: "Sénégal".to_string(),
            city: "Dakar".to_string(),
            kind: "Phishing".to_string(),
            severity: Severity::High,
            count: 23,
            lat: 14.7167,
            lng: -17.4677,
        },
        GeoIncidentRecord {
            id: "2".to_string(),
            country: "France".to_string(),
            city: "Paris".to_string(),
            kind: "Ransomware".to_string(),
            severity: Severity::Critical,
            count: 47,
            lat: 48.8566,
            lng: 2.3522,
        },
        GeoIncidentRecord {
            id: "3".to_string(),
            country: "États-Unis".to_string(),
            city: "New York".to_string(),
            kind: "APT".to_string(),
            severity: Severity::Critical,
            count: 89,
            lat: 40.7128,
            lng: -74.0060,
        },
        GeoIncidentRecord {
            id: "4".to_string(),
            country: "Chine".to_string(),
            city: "Beijing".to_string(),
            kind: "Espionnage".to_string(),
            severity: Severity::High,
            count: 156,
            lat: 39.9042,
            lng: 116.4074,
        },
        GeoIncidentRecord {
            id: "5".to_string(),
            country: "Russie".to_string(),
            city: "Moscou".to_string(),
            kind: "Cyberwarfare".to_string(),
            severity: Severity::Critical,
            count: 234,
            lat: 55.7558,
            lng: 37.6173,
        },
    ]
}

/// Recent alerts shown on the overview strip
pub fn alerts() -> Vec<AlertRecord> {
    vec![
        AlertRecord {
            title: "Détection APT".to_string(),
            detail: "Infrastructure bancaire compromise".to_string(),
            minutes_ago: 15,
            severity: Severity::Critical,
        },
        AlertRecord {
            title: "Campagne Phishing".to_string(),
            detail: "Ciblage ministères gouvernementaux".to_string(),
            minutes_ago: 32,
            severity: Severity::High,
        },
        AlertRecord {
            title: "Scan de Ports".to_string(),
            detail: "Activité suspecte détectée".to_string(),
            minutes_ago: 60,
            severity: Severity::Medium,
        },
    ]
}

/// Six months of per-family detection counts
pub fn threat_trend() -> Vec<TrendPoint> {
    let rows = [
        ("Jan", 45, 23, 12, 8),
        ("Fév", 52, 28, 15, 11),
        ("Mar", 48, 31, 18, 9),
        ("Avr", 61, 35, 22, 14),
        ("Mai", 55, 42, 25, 16),
        ("Jun", 67, 38, 28, 18),
    ];
    rows.iter()
        .map(|(month, malware, phishing, ransomware, apt)| TrendPoint {
            month: month.to_string(),
            malware: *malware,
            phishing: *phishing,
            ransomware: *ransomware,
            apt: *apt,
        })
        .collect()
}

/// Detection counts per severity over the reporting period
pub fn severity_distribution() -> Vec<SeverityBucket> {
    vec![
        SeverityBucket {
            severity: Severity::Critical,
            count: 234,
        },
        SeverityBucket {
            severity: Severity::High,
            count: 456,
        },
        SeverityBucket {
            severity: Severity::Medium,
            count: 789,
        },
        SeverityBucket {
            severity: Severity::Low,
            count: 345,
        },
    ]
}

/// Incident volume per detection channel
pub fn channel_volumes() -> Vec<ChannelVolume> {
    let rows = [
        ("OSINT", 145),
        ("Honeypots", 89),
        ("Feeds CTI", 234),
        ("Partenaires", 67),
        ("Internes", 123),
        ("Signalements", 98),
    ];
    rows.iter()
        .map(|(channel, incidents)| ChannelVolume {
            channel: channel.to_string(),
            incidents: *incidents,
        })
        .collect()
}

/// Incident volume per world region
pub fn region_volumes() -> Vec<RegionVolume> {
    let rows = [
        ("Afrique de l'Ouest", 89, 34),
        ("Europe", 234, 0),
        ("Amérique du Nord", 345, 0),
        ("Asie", 456, 0),
        ("Océanie", 23, 0),
        ("Amérique du Sud", 67, 0),
    ];
    rows.iter()
        .map(|(region, incidents, local)| RegionVolume {
            region: region.to_string(),
            incidents: *incidents,
            local: *local,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_sizes() {
        assert_eq!(threats().len(), 3);
        assert_eq!(incidents().len(), 4);
        assert_eq!(sources().len(), 5);
        assert_eq!(intel().len(), 3);
        assert_eq!(analyses().len(), 2);
        assert_eq!(geo_incidents().len(), 5);
        assert_eq!(alerts().len(), 3);
        assert_eq!(threat_trend().len(), 6);
        assert_eq!(severity_distribution().len(), 4);
        assert_eq!(channel_volumes().len(), 6);
        assert_eq!(region_volumes().len(), 6);
    }

    #[test]
    fn test_source_reliabilities() {
        let reliabilities: Vec<u8> = sources().iter().map(|s| s.reliability).collect();
        assert_eq!(reliabilities, vec![95, 98, 92, 89, 75]);
    }

    #[test]
    fn test_percentages_in_range() {
        assert!(sources().iter().all(|s| s.reliability <= 100));
        assert!(intel().iter().all(|i| i.confidence <= 100));
    }

    #[test]
    fn test_incident_timestamps_ordered() {
        for incident in incidents() {
            assert!(
                incident.updated_at >= incident.created_at,
                "incident {} updated before creation",
                incident.id
            );
        }
    }

    #[test]
    fn test_map_coordinates_in_range() {
        for geo in geo_incidents() {
            assert!((-90.0..=90.0).contains(&geo.lat), "{} lat out of range", geo.city);
            assert!((-180.0..=180.0).contains(&geo.lng), "{} lng out of range", geo.city);
        }
    }

    #[test]
    fn test_hospital_incident_resolution_time() {
        let incidents = incidents();
        let hospital = incidents.iter().find(|i| i.id == "INC-2025-004").unwrap();
        assert_eq!(hospital.resolution_hours(), 15);
    }
}
