// clinic/src/export/csv.rs
use models::{AppointmentRow, Doctor, Patient};

/// Plain header row, then every data field wrapped in double quotes with
/// embedded quotes doubled.
fn render(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut out = String::new();
    out.push_str(&headers.join(","));
    out.push('\n');
    for row in rows {
        let quoted: Vec<String> = row
            .iter()
            .map(|field| format!("\"{}\"", field.replace('"', "\"\"")))
            .collect();
        out.push_str(&quoted.join(","));
        out.push('\n');
    }
    out
}

pub fn patients_csv(patients: &[Patient]) -> String {
    render(
        &["patient_id", "name", "age", "gender", "phone", "address"],
        patients
            .iter()
            .map(|p| {
                vec![
                    p.id.to_string(),
                    p.name.clone(),
                    p.age.to_string(),
                    p.gender.clone(),
                    p.phone.clone(),
                    p.address.clone(),
                ]
            })
            .collect(),
    )
}

pub fn doctors_csv(doctors: &[Doctor]) -> String {
    render(
        &["doctor_id", "name", "specialization", "phone"],
        doctors
            .iter()
            .map(|d| {
                vec![
                    d.id.to_string(),
                    d.name.clone(),
                    d.specialization.clone(),
                    d.phone.clone(),
                ]
            })
            .collect(),
    )
}

pub fn appointments_csv(rows: &[AppointmentRow]) -> String {
    render(
        &["appointment_id", "patient_name", "doctor_name", "date", "time", "symptoms"],
        rows.iter()
            .map(|a| {
                vec![
                    a.id.to_string(),
                    a.patient_name.clone().unwrap_or_default(),
                    a.doctor_name.clone().unwrap_or_default(),
                    a.date.clone(),
                    a.time.clone(),
                    a.symptoms.clone().unwrap_or_default(),
                ]
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::Patient;

    #[test]
    fn quotes_inside_fields_are_doubled() {
        let patients = vec![Patient {
            id: 1,
            name: "Armaan \"AK\" Khandelwal".into(),
            age: 26,
            gender: "Male".into(),
            phone: "9991122334".into(),
            address: "Bhopal, MP".into(),
        }];
        let csv = patients_csv(&patients);
        let mut lines = csv.lines();
        assert_eq!(lines.next().unwrap(), "patient_id,name,age,gender,phone,address");
        assert_eq!(
            lines.next().unwrap(),
            "\"1\",\"Armaan \"\"AK\"\" Khandelwal\",\"26\",\"Male\",\"9991122334\",\"Bhopal, MP\""
        );
    }

    #[test]
    fn missing_join_names_render_empty() {
        let rows = vec![models::AppointmentRow {
            id: 4,
            patient_id: 7,
            patient_name: None,
            doctor_name: Some("Dr. Neha Sharma".into()),
            date: "2025-02-17".into(),
            time: "04:45 PM".into(),
            symptoms: None,
        }];
        let csv = appointments_csv(&rows);
        assert!(csv.ends_with("\"4\",\"\",\"Dr. Neha Sharma\",\"2025-02-17\",\"04:45 PM\",\"\"\n"));
    }
}
