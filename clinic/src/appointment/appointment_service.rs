// clinic/src/appointment/appointment_service.rs
//! Booking workflow: every mutation is policy-checked first, then
//! validated, then existence-checked, then written. For edit/delete the
//! ownership check runs against the appointment's stored patient id.

use log::info;

use models::{
    AppointmentRow, BookingRequest, ClinicError, ClinicResult, Role, SessionContext,
};
use store::repository::{appointments, doctors, patients};
use store::Database;

use crate::datetime::{normalize_stored_date, parse_flexible_date, STORE_DATE};
use crate::policy::{authorize, Action};

pub struct AppointmentService {
    db: Database,
}

impl AppointmentService {
    pub fn new(db: Database) -> Self {
        AppointmentService { db }
    }

    /// Books an appointment. Patients may only book for their own
    /// patient id; both referenced rows must exist.
    pub fn book(&self, session: &SessionContext, request: BookingRequest) -> ClinicResult<i64> {
        authorize(
            Some(session),
            Action::BookAppointment,
            Some(request.patient_id),
        )?;

        let date = parse_flexible_date(&request.date)?;

        let conn = self.db.connect()?;
        if !patients::patient_exists(&conn, request.patient_id)? {
            return Err(ClinicError::not_found("patient", request.patient_id));
        }
        if !doctors::doctor_exists(&conn, request.doctor_id)? {
            return Err(ClinicError::not_found("doctor", request.doctor_id));
        }

        let appointment_id = appointments::insert_appointment(
            &conn,
            request.patient_id,
            request.doctor_id,
            &date.format(STORE_DATE).to_string(),
            request.time.trim(),
            request.symptoms.as_deref().map(str::trim),
        )?;
        info!(
            "booked appointment {appointment_id} (patient {}, doctor {})",
            request.patient_id, request.doctor_id
        );
        Ok(appointment_id)
    }

    /// Changes date and time only. The target is looked up first so the
    /// ownership rule can be applied to its stored patient id.
    pub fn edit(
        &self,
        session: &SessionContext,
        appointment_id: i64,
        date: &str,
        time: &str,
    ) -> ClinicResult<()> {
        let conn = self.db.connect()?;
        let appointment = appointments::get_appointment(&conn, appointment_id)?
            .ok_or_else(|| ClinicError::not_found("appointment", appointment_id))?;
        authorize(
            Some(session),
            Action::EditAppointment,
            Some(appointment.patient_id),
        )?;

        let parsed = parse_flexible_date(date)?;
        appointments::update_schedule(
            &conn,
            appointment_id,
            &parsed.format(STORE_DATE).to_string(),
            time.trim(),
        )?;
        info!("updated appointment {appointment_id}");
        Ok(())
    }

    pub fn delete(&self, session: &SessionContext, appointment_id: i64) -> ClinicResult<()> {
        let conn = self.db.connect()?;
        let appointment = appointments::get_appointment(&conn, appointment_id)?
            .ok_or_else(|| ClinicError::not_found("appointment", appointment_id))?;
        authorize(
            Some(session),
            Action::DeleteAppointment,
            Some(appointment.patient_id),
        )?;

        appointments::delete_appointment(&conn, appointment_id)?;
        info!("deleted appointment {appointment_id}");
        Ok(())
    }

    /// Joined listing, newest first. Patient sessions see only their own
    /// rows; an unlinked patient account sees nothing. Stored dates are
    /// normalized for display.
    pub fn list(&self, session: &SessionContext) -> ClinicResult<Vec<AppointmentRow>> {
        authorize(Some(session), Action::ViewAppointments, None)?;

        let conn = self.db.connect()?;
        let mut rows = match session.role {
            Role::Patient => match session.patient_id {
                Some(own) => appointments::list_appointments(&conn, Some(own))?,
                None => Vec::new(),
            },
            _ => appointments::list_appointments(&conn, None)?,
        };
        for row in &mut rows {
            row.date = normalize_stored_date(&row.date);
        }
        Ok(rows)
    }
}
