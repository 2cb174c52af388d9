//! Built-in task-set templates for the priority-sampling engine.
//!
//! Sixteen named catalogs of composite tasks. Each is plain data; pick one
//! with [`Template::from_menu_index`] (1-based, as shown in a menu) or
//! iterate [`Template::ALL`].

use serde::{Deserialize, Serialize};

use crate::models::{BasicTask, CompositeTask};

/// A named task set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    OfficeWork,
    HomeChores,
    PersonalProjects,
    CriticalSituations,
    EmergencyManagement,
    ProductLaunch,
    MedicalFacilityOperations,
    SoftwareDevelopment,
    ScientificResearchProject,
    ConstructionProjectManagement,
    EventPlanningCoordination,
    HighStressOfficeWork,
    IntenseAcademicResearch,
    CriticalInfrastructureMaintenance,
    EmergencyResponseCoordination,
    IntensiveCareUnitManagement,
}

/// `(task name, [(basic task, duration, difficulty)], base attention)`.
/// Criticality equals the task's position in the list.
type Row = (&'static str, &'static [(&'static str, f64, f64)], f64);

impl Template {
    /// Every template in menu order.
    pub const ALL: [Template; 16] = [
        Template::OfficeWork,
        Template::HomeChores,
        Template::PersonalProjects,
        Template::CriticalSituations,
        Template::EmergencyManagement,
        Template::ProductLaunch,
        Template::MedicalFacilityOperations,
        Template::SoftwareDevelopment,
        Template::ScientificResearchProject,
        Template::ConstructionProjectManagement,
        Template::EventPlanningCoordination,
        Template::HighStressOfficeWork,
        Template::IntenseAcademicResearch,
        Template::CriticalInfrastructureMaintenance,
        Template::EmergencyResponseCoordination,
        Template::IntensiveCareUnitManagement,
    ];

    /// Template for a 1-based menu choice.
    pub fn from_menu_index(choice: usize) -> Option<Self> {
        choice
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    /// Menu label.
    pub fn name(&self) -> &'static str {
        match self {
            Template::OfficeWork => "Office Work",
            Template::HomeChores => "Home Chores",
            Template::PersonalProjects => "Personal Projects",
            Template::CriticalSituations => "Critical Situations",
            Template::EmergencyManagement => "Emergency Management",
            Template::ProductLaunch => "Product Launch",
            Template::MedicalFacilityOperations => "Medical Facility Operations",
            Template::SoftwareDevelopment => "Software Development",
            Template::ScientificResearchProject => "Scientific Research Project",
            Template::ConstructionProjectManagement => "Construction Project Management",
            Template::EventPlanningCoordination => "Event Planning and Coordination",
            Template::HighStressOfficeWork => "High-Stress Office Work",
            Template::IntenseAcademicResearch => "Intense Academic Research",
            Template::CriticalInfrastructureMaintenance => "Critical Infrastructure Maintenance",
            Template::EmergencyResponseCoordination => "Emergency Response Coordination",
            Template::IntensiveCareUnitManagement => "Intensive Care Unit Management",
        }
    }

    /// Builds the template's tasks (fresh cursors, ids 0..n).
    pub fn tasks(&self) -> Vec<CompositeTask> {
        self.rows()
            .iter()
            .enumerate()
            .map(|(id, (name, basics, base_attention))| {
                basics
                    .iter()
                    .fold(CompositeTask::new(id, *name), |task, (b, d, k)| {
                        task.with_basic_task(BasicTask::new(*b, *d, *k))
                    })
                    .with_base_attention(*base_attention)
                    .with_criticality(id as f64)
            })
            .collect()
    }

    fn rows(&self) -> &'static [Row] {
        match self {
            Template::OfficeWork => &[
                ("Email Management", &[("Email Management", 15.0, 0.5), ("Follow Up", 10.0, 0.5)], 0.8),
                ("Project Planning", &[("Initial Planning", 30.0, 0.7)], 0.75),
                ("Meeting", &[("Team Meeting", 45.0, 0.6)], 0.7),
                ("Report Writing", &[("Write Report", 60.0, 0.5)], 0.65),
                ("Team Coordination", &[("Coordinate", 30.0, 0.6)], 0.7),
            ],
            Template::HomeChores => &[
                ("Cooking", &[("Prepare Ingredients", 15.0, 0.5), ("Cook Meal", 10.0, 0.5)], 0.8),
                ("Cleaning", &[("Clean Kitchen", 20.0, 0.6)], 0.7),
                ("Laundry", &[("Wash Clothes", 30.0, 0.4)], 0.6),
            ],
            Template::PersonalProjects => &[
                ("Reading", &[("Read Book", 30.0, 0.5)], 0.7),
                ("Writing", &[("Write Article", 45.0, 0.7)], 0.8),
                ("Exercise", &[("Workout", 20.0, 0.6)], 0.9),
            ],
            Template::CriticalSituations => &[
                ("Emergency Response", &[("Initial Response", 10.0, 1.0), ("Follow Up", 15.0, 1.0)], 1.0),
                ("System Monitoring", &[("Monitor Systems", 60.0, 0.8)], 0.9),
                ("Critical Decision Making", &[("Make Decision", 30.0, 0.9)], 0.95),
            ],
            Template::EmergencyManagement => &[
                ("Fire Alarm Response", &[("Initial Response", 5.0, 1.0), ("Follow Up", 10.0, 1.0)], 1.0),
                ("Evacuation Plan", &[("Plan Evacuation", 20.0, 0.9)], 0.9),
                ("Medical Assistance", &[("Assist Patients", 30.0, 0.8)], 0.95),
                ("Resource Coordination", &[("Coordinate Resources", 25.0, 0.7)], 0.85),
                ("Communication Management", &[("Manage Communication", 15.0, 0.8), ("Follow Up", 10.0, 0.8)], 0.9),
            ],
            Template::ProductLaunch => &[
                ("Market Research", &[("Research Market", 30.0, 0.6)], 0.8),
                ("Product Design", &[("Design Product", 45.0, 0.9)], 0.9),
                ("Prototyping", &[("Create Prototype", 60.0, 0.8)], 0.9),
                ("Testing", &[("Test Product", 50.0, 0.7)], 0.8),
                ("Marketing Strategy", &[("Plan Marketing", 40.0, 0.7)], 0.85),
                ("Sales Plan", &[("Plan Sales", 35.0, 0.8)], 0.8),
                ("Launch Event", &[("Plan Event", 20.0, 0.9)], 0.9),
            ],
            Template::MedicalFacilityOperations => &[
                ("Patient Checkup", &[("Initial Checkup", 20.0, 0.5), ("Follow Up", 15.0, 0.5)], 0.7),
                ("Surgery", &[("Perform Surgery", 90.0, 1.0)], 1.0),
                ("Emergency Care", &[("Provide Care", 30.0, 0.9)], 0.95),
                ("Medication Administration", &[("Administer Medication", 10.0, 0.7)], 0.8),
                ("Record Keeping", &[("Update Records", 25.0, 0.6)], 0.7),
                ("Staff Coordination", &[("Coordinate Staff", 20.0, 0.7)], 0.75),
                ("Facility Maintenance", &[("Maintain Facility", 40.0, 0.6)], 0.65),
            ],
            Template::SoftwareDevelopment => &[
                ("Requirement Analysis", &[("Analyze Requirements", 30.0, 0.5)], 0.7),
                ("System Design", &[("Design System", 45.0, 0.8)], 0.85),
                ("Coding", &[("Write Code", 60.0, 0.9)], 0.9),
                ("Testing", &[("Test Code", 40.0, 0.7)], 0.8),
                ("Debugging", &[("Debug Code", 30.0, 0.8)], 0.8),
                ("Documentation", &[("Write Documentation", 20.0, 0.6)], 0.65),
                ("Deployment", &[("Deploy System", 35.0, 0.8)], 0.8),
            ],
            Template::ScientificResearchProject => &[
                ("Literature Review", &[("Review Literature", 40.0, 0.6)], 0.75),
                ("Experiment Design", &[("Design Experiment", 50.0, 0.7)], 0.8),
                ("Data Collection", &[("Collect Data", 60.0, 0.8)], 0.85),
                ("Data Analysis", &[("Analyze Data", 45.0, 0.8)], 0.85),
                ("Hypothesis Testing", &[("Test Hypothesis", 30.0, 0.9)], 0.9),
                ("Report Writing", &[("Write Report", 35.0, 0.7)], 0.75),
                ("Presentation Preparation", &[("Prepare Presentation", 25.0, 0.7)], 0.75),
            ],
            Template::ConstructionProjectManagement => &[
                ("Site Preparation", &[("Prepare Site", 20.0, 0.7)], 0.75),
                ("Foundation Work", &[("Lay Foundation", 50.0, 0.9)], 0.9),
                ("Framing", &[("Frame Building", 40.0, 0.8)], 0.85),
                ("Electrical and Plumbing", &[("Install Systems", 60.0, 0.8)], 0.85),
                ("Interior Work", &[("Finish Interior", 45.0, 0.7)], 0.8),
                ("Exterior Work", &[("Finish Exterior", 35.0, 0.7)], 0.8),
                ("Final Inspection", &[("Inspect Building", 30.0, 0.9)], 0.9),
            ],
            Template::EventPlanningCoordination => &[
                ("Venue Selection", &[("Select Venue", 15.0, 0.6)], 0.7),
                ("Guest List Management", &[("Manage List", 25.0, 0.7)], 0.75),
                ("Catering Arrangement", &[("Arrange Catering", 20.0, 0.8)], 0.8),
                ("Decoration", &[("Decorate Venue", 30.0, 0.7)], 0.75),
                ("Entertainment Planning", &[("Plan Entertainment", 35.0, 0.8)], 0.8),
                ("Logistics Coordination", &[("Coordinate Logistics", 20.0, 0.7)], 0.75),
                ("On-site Management", &[("Manage On-site", 40.0, 0.9)], 0.85),
            ],
            Template::HighStressOfficeWork => &[
                ("Urgent Emails", &[("Respond to Emails", 5.0, 1.0), ("Follow Up", 5.0, 1.0)], 1.0),
                ("Critical Report", &[("Write Report", 60.0, 1.0)], 1.0),
                ("Emergency Meeting", &[("Attend Meeting", 30.0, 0.9)], 0.95),
                ("Client Presentation", &[("Prepare Presentation", 40.0, 0.9)], 0.95),
                ("System Outage", &[("Fix Outage", 50.0, 1.0)], 1.0),
                ("Budget Review", &[("Review Budget", 45.0, 0.9)], 0.9),
                ("Team Coordination", &[("Coordinate Team", 35.0, 0.8)], 0.85),
            ],
            Template::IntenseAcademicResearch => &[
                ("Grant Proposal Writing", &[("Write Proposal", 60.0, 1.0)], 1.0),
                ("Data Analysis", &[("Analyze Data", 50.0, 0.9)], 0.95),
                ("Field Study", &[("Conduct Study", 90.0, 1.0)], 1.0),
                ("Manuscript Preparation", &[("Prepare Manuscript", 45.0, 0.9)], 0.95),
                ("Conference Presentation", &[("Prepare Presentation", 30.0, 0.8)], 0.9),
                ("Collaborative Meeting", &[("Attend Meeting", 35.0, 0.7)], 0.85),
                ("Experiment Setup", &[("Setup Experiment", 40.0, 0.8)], 0.9),
            ],
            Template::CriticalInfrastructureMaintenance => &[
                ("Power Grid Monitoring", &[("Monitor Grid", 60.0, 1.0)], 1.0),
                ("Network Security Check", &[("Check Security", 45.0, 0.9)], 0.95),
                ("Emergency Repair", &[("Repair System", 50.0, 1.0)], 1.0),
                ("System Diagnostics", &[("Run Diagnostics", 30.0, 0.8)], 0.9),
                ("Routine Maintenance", &[("Perform Maintenance", 40.0, 0.7)], 0.85),
                ("Backup System Activation", &[("Activate Backup", 35.0, 0.9)], 0.9),
                ("Load Balancing", &[("Balance Load", 20.0, 0.7)], 0.8),
            ],
            Template::EmergencyResponseCoordination => &[
                ("Disaster Assessment", &[("Assess Disaster", 20.0, 1.0)], 1.0),
                ("Resource Allocation", &[("Allocate Resources", 40.0, 0.9)], 0.95),
                ("Team Deployment", &[("Deploy Teams", 30.0, 0.8)], 0.9),
                ("Public Communication", &[("Communicate with Public", 25.0, 0.8)], 0.85),
                ("Situation Monitoring", &[("Monitor Situation", 35.0, 0.7)], 0.85),
                ("Coordination with Authorities", &[("Coordinate with Authorities", 50.0, 0.9)], 0.9),
                ("Medical Assistance", &[("Provide Medical Assistance", 60.0, 1.0)], 1.0),
            ],
            Template::IntensiveCareUnitManagement => &[
                ("Patient Monitoring", &[("Monitor Patient", 15.0, 0.8), ("Follow Up", 15.0, 0.8)], 0.9),
                ("Emergency Procedures", &[("Perform Procedure", 30.0, 1.0)], 1.0),
                ("Medication Administration", &[("Administer Medication", 20.0, 0.7)], 0.8),
                ("Family Communication", &[("Communicate with Family", 25.0, 0.6)], 0.75),
                ("Staff Coordination", &[("Coordinate Staff", 35.0, 0.8)], 0.85),
                ("Equipment Management", &[("Manage Equipment", 40.0, 0.7)], 0.8),
                ("Documentation", &[("Document Records", 30.0, 0.6)], 0.75),
            ],
        }
    }
}
