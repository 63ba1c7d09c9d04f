//! Built-in sample dataset.
//!
//! Used to seed any collection whose durable key is absent, so a fresh
//! database always has a browsable directory.

use chrono::{Duration, TimeZone, Utc};

use crate::models::appointment::{Appointment, AppointmentStatus};
use crate::models::counselor::Counselor;
use crate::models::invoice::{Invoice, InvoiceStatus};
use crate::models::message::Message;

pub fn sample_counselors() -> Vec<Counselor> {
    vec![
        Counselor {
            id: "c1".to_string(),
            name: "Dr. Sarah Johnson".to_string(),
            title: "Licensed Biblical Counselor".to_string(),
            credentials: "Ph.D., LPC, ACBC".to_string(),
            denomination: "Non-denominational".to_string(),
            image_url: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?w=600"
                .to_string(),
            specialties: vec![
                "Marriage".to_string(),
                "Anxiety".to_string(),
                "Depression".to_string(),
            ],
            location: "Nashville, TN".to_string(),
            bio: "Dr. Sarah Johnson has been providing biblical counseling for over 15 years, \
                  specializing in marriage and family therapy. She holds a doctorate in \
                  counseling psychology and is certified in biblical counseling by the \
                  Association of Certified Biblical Counselors."
                .to_string(),
            email: "sarah.johnson@example.com".to_string(),
            paypal_link: "https://paypal.me/sarahjohnson".to_string(),
            availability: vec![
                "Monday".to_string(),
                "Wednesday".to_string(),
                "Friday".to_string(),
            ],
            hourly_rate: 90.0,
            education: "Dallas Theological Seminary".to_string(),
            accreditation: vec!["ACBC".to_string(), "LPC".to_string()],
            gender: "Female".to_string(),
            years_experience: 15,
            accepting_clients: true,
        },
        Counselor {
            id: "c2".to_string(),
            name: "Pastor Michael Thompson".to_string(),
            title: "Pastoral Counselor".to_string(),
            credentials: "M.Div., CCBC".to_string(),
            denomination: "Southern Baptist Convention (SBC)".to_string(),
            image_url: "https://images.unsplash.com/photo-1560250097-0b93528c311a?w=600"
                .to_string(),
            specialties: vec![
                "Grief".to_string(),
                "Spiritual Direction".to_string(),
                "Life Transitions".to_string(),
            ],
            location: "Atlanta, GA".to_string(),
            bio: "Pastor Michael Thompson has served in ministry for 20 years and provides \
                  compassionate biblical guidance through life's most challenging moments. He \
                  specializes in grief counseling and spiritual direction."
                .to_string(),
            email: "michael.thompson@example.com".to_string(),
            paypal_link: "https://paypal.me/michaelthompson".to_string(),
            availability: vec![
                "Tuesday".to_string(),
                "Thursday".to_string(),
                "Saturday".to_string(),
            ],
            hourly_rate: 75.0,
            education: "Southern Baptist Theological Seminary".to_string(),
            accreditation: vec!["CCBC".to_string()],
            gender: "Male".to_string(),
            years_experience: 20,
            accepting_clients: false,
        },
        Counselor {
            id: "c3".to_string(),
            name: "Rebecca Wilson, LMFT".to_string(),
            title: "Licensed Marriage & Family Therapist".to_string(),
            credentials: "M.A., LMFT, NBC-HWC".to_string(),
            denomination: "Evangelical Presbyterian Church (EPC)".to_string(),
            image_url: "https://images.unsplash.com/photo-1551836022-d5d88e9218df?w=600"
                .to_string(),
            specialties: vec![
                "Marriage".to_string(),
                "Parenting".to_string(),
                "Trauma".to_string(),
            ],
            location: "Dallas, TX".to_string(),
            bio: "Rebecca Wilson is a licensed marriage and family therapist who integrates \
                  biblical principles with evidence-based therapeutic approaches. She has \
                  helped hundreds of couples strengthen their marriages and navigate parenting \
                  challenges."
                .to_string(),
            email: "rebecca.wilson@example.com".to_string(),
            paypal_link: "https://paypal.me/rebeccawilson".to_string(),
            availability: vec![
                "Monday".to_string(),
                "Tuesday".to_string(),
                "Thursday".to_string(),
            ],
            hourly_rate: 85.0,
            education: "Trinity Evangelical Divinity School".to_string(),
            accreditation: vec!["LMFT".to_string(), "AACC".to_string()],
            gender: "Female".to_string(),
            years_experience: 8,
            accepting_clients: true,
        },
        Counselor {
            id: "c4".to_string(),
            name: "David Rodriguez, MA".to_string(),
            title: "Biblical Counselor".to_string(),
            credentials: "M.A., CCEF".to_string(),
            denomination: "Presbyterian Church in America (PCA)".to_string(),
            image_url: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=600"
                .to_string(),
            specialties: vec![
                "Addiction Recovery".to_string(),
                "Men's Issues".to_string(),
                "Anger Management".to_string(),
            ],
            location: "Phoenix, AZ".to_string(),
            bio: "David Rodriguez specializes in helping men overcome addiction and manage \
                  anger through biblical principles. With 10 years of experience in recovery \
                  ministry, he provides compassionate yet direct counsel."
                .to_string(),
            email: "david.rodriguez@example.com".to_string(),
            paypal_link: "https://paypal.me/davidrodriguez".to_string(),
            availability: vec![
                "Wednesday".to_string(),
                "Friday".to_string(),
                "Saturday".to_string(),
            ],
            hourly_rate: 80.0,
            education: "Westminster Theological Seminary".to_string(),
            accreditation: vec!["CCEF".to_string()],
            gender: "Male".to_string(),
            years_experience: 10,
            accepting_clients: true,
        },
        Counselor {
            id: "c5".to_string(),
            name: "Jennifer Liu, LPC".to_string(),
            title: "Christian Counselor".to_string(),
            credentials: "M.S., LPC, BCPCC".to_string(),
            denomination: "Anglican Church in North America (ACNA)".to_string(),
            image_url: "https://images.unsplash.com/photo-1580489944761-15a19d654956?w=600"
                .to_string(),
            specialties: vec![
                "Depression".to_string(),
                "Anxiety".to_string(),
                "Cultural Adjustment".to_string(),
            ],
            location: "Seattle, WA".to_string(),
            bio: "Jennifer Liu is a licensed professional counselor who specializes in helping \
                  clients navigate depression, anxiety, and cultural adjustment issues. She \
                  integrates evidence-based counseling methods with biblical principles."
                .to_string(),
            email: "jennifer.liu@example.com".to_string(),
            paypal_link: "https://paypal.me/jenniferliu".to_string(),
            availability: vec![
                "Monday".to_string(),
                "Wednesday".to_string(),
                "Friday".to_string(),
            ],
            hourly_rate: 95.0,
            education: "Fuller Theological Seminary".to_string(),
            accreditation: vec!["LPC".to_string(), "BCPCC".to_string()],
            gender: "Female".to_string(),
            years_experience: 7,
            accepting_clients: true,
        },
        Counselor {
            id: "c6".to_string(),
            name: "Dr. James Williams".to_string(),
            title: "Pastoral Counselor".to_string(),
            credentials: "Ph.D., D.Min., AAPC".to_string(),
            denomination: "Global Methodist Church (GMC)".to_string(),
            image_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=600"
                .to_string(),
            specialties: vec![
                "Pastoral Care".to_string(),
                "Spiritual Formation".to_string(),
                "Grief".to_string(),
            ],
            location: "Chicago, IL".to_string(),
            bio: "Dr. James Williams has served in ministry and counseling for over 25 years. \
                  With doctoral degrees in ministry and psychology, he provides integrative \
                  care that addresses both spiritual and psychological needs."
                .to_string(),
            email: "james.williams@example.com".to_string(),
            paypal_link: "https://paypal.me/jameswilliams".to_string(),
            availability: vec!["Tuesday".to_string(), "Thursday".to_string()],
            hourly_rate: 100.0,
            education: "Gordon-Conwell Theological Seminary".to_string(),
            accreditation: vec!["AAPC".to_string(), "APA".to_string()],
            gender: "Male".to_string(),
            years_experience: 25,
            accepting_clients: false,
        },
    ]
}

pub fn sample_appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: "a1".to_string(),
            counselor_id: "c1".to_string(),
            client_id: "cl1".to_string(),
            client_name: "John Smith".to_string(),
            date: Utc.with_ymd_and_hms(2023, 6, 15, 14, 0, 0).unwrap(),
            status: AppointmentStatus::Completed,
            notes: Some("Initial consultation - discussed primary concerns".to_string()),
            meeting_link: Some("https://meet.google.com/abc-defg-hij".to_string()),
        },
        Appointment {
            id: "a2".to_string(),
            counselor_id: "c1".to_string(),
            client_id: "cl1".to_string(),
            client_name: "John Smith".to_string(),
            date: Utc::now() + Duration::days(2),
            status: AppointmentStatus::Scheduled,
            notes: None,
            meeting_link: Some("https://meet.google.com/klm-nopq-rst".to_string()),
        },
        Appointment {
            id: "a3".to_string(),
            counselor_id: "c2".to_string(),
            client_id: "cl2".to_string(),
            client_name: "Mary Johnson".to_string(),
            date: Utc::now() + Duration::days(3),
            status: AppointmentStatus::Scheduled,
            notes: None,
            meeting_link: Some("https://meet.google.com/uvw-xyz-123".to_string()),
        },
    ]
}

pub fn sample_messages() -> Vec<Message> {
    vec![
        Message {
            id: "m1".to_string(),
            sender_id: "cl1".to_string(),
            sender_name: "John Smith".to_string(),
            receiver_id: "c1".to_string(),
            content: "Hello Dr. Johnson, I was wondering if we could move our appointment to \
                      an hour later?"
                .to_string(),
            timestamp: Utc::now() - Duration::hours(2),
            read: true,
        },
        Message {
            id: "m2".to_string(),
            sender_id: "c1".to_string(),
            sender_name: "Dr. Sarah Johnson".to_string(),
            receiver_id: "cl1".to_string(),
            content: "Hi John, that should be fine. I'll update our calendar invitation."
                .to_string(),
            timestamp: Utc::now() - Duration::hours(1),
            read: false,
        },
    ]
}

pub fn sample_invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: "i1".to_string(),
            counselor_id: "c1".to_string(),
            amount: 90.0,
            date: Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap(),
            due_date: Utc.with_ymd_and_hms(2023, 5, 15, 0, 0, 0).unwrap(),
            status: InvoiceStatus::Paid,
            description: "Monthly platform subscription - May 2023".to_string(),
        },
        Invoice {
            id: "i2".to_string(),
            counselor_id: "c2".to_string(),
            amount: 90.0,
            date: Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap(),
            due_date: Utc.with_ymd_and_hms(2023, 5, 15, 0, 0, 0).unwrap(),
            status: InvoiceStatus::Pending,
            description: "Monthly platform subscription - May 2023".to_string(),
        },
    ]
}
