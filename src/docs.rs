use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use fitness_auth::Role;
use fitness_models::admins::{Admin, AdminTypeResponse, CreateAdminDto, CreatedAdmin};
use fitness_models::auth::{AdminSignInDto, TokenResponse, TrainerSignInDto};
use fitness_models::clients::{Client, ClientDto, CreatedClient};
use fitness_models::trainers::{
    CashResponse, CreateTrainerDto, CreatedTrainer, Trainer, TrainerSummary,
};
use fitness_models::workout_types::{CreatedWorkoutType, WorkoutType, WorkoutTypeDto};
use fitness_models::workouts::{
    ChangeStatusDto, CreateWorkoutDto, CreatedWorkout, UpdateWorkoutDto, Workout, WorkoutStatus,
};

use crate::modules::auth::controller::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::admin_sign_in,
        crate::modules::auth::controller::trainer_sign_in,
        crate::modules::admins::controller::get_admins,
        crate::modules::admins::controller::create_admin,
        crate::modules::admins::controller::get_admin_type,
        crate::modules::admins::controller::get_admin,
        crate::modules::admins::controller::delete_admin,
        crate::modules::trainers::controller::get_trainers,
        crate::modules::trainers::controller::create_trainer,
        crate::modules::trainers::controller::get_trainer,
        crate::modules::trainers::controller::delete_trainer,
        crate::modules::trainers::controller::get_cash_by_day,
        crate::modules::trainers::controller::get_cash_by_month,
        crate::modules::clients::controller::get_clients,
        crate::modules::clients::controller::create_client,
        crate::modules::clients::controller::get_client,
        crate::modules::clients::controller::update_client,
        crate::modules::workout_types::controller::get_workout_types,
        crate::modules::workout_types::controller::create_workout_type,
        crate::modules::workout_types::controller::get_workout_type,
        crate::modules::workout_types::controller::update_workout_type,
        crate::modules::workout_types::controller::delete_workout_type,
        crate::modules::workouts::controller::get_workouts,
        crate::modules::workouts::controller::create_workout,
        crate::modules::workouts::controller::get_workouts_by_date,
        crate::modules::workouts::controller::get_workouts_by_interval,
        crate::modules::workouts::controller::get_workout,
        crate::modules::workouts::controller::update_workout,
        crate::modules::workouts::controller::delete_workout,
        crate::modules::workouts::controller::change_workout_status,
    ),
    components(
        schemas(
            Role,
            ErrorResponse,
            AdminSignInDto,
            TrainerSignInDto,
            TokenResponse,
            Admin,
            CreateAdminDto,
            CreatedAdmin,
            AdminTypeResponse,
            Trainer,
            TrainerSummary,
            CreateTrainerDto,
            CreatedTrainer,
            CashResponse,
            Client,
            ClientDto,
            CreatedClient,
            WorkoutType,
            WorkoutTypeDto,
            CreatedWorkoutType,
            Workout,
            WorkoutStatus,
            CreateWorkoutDto,
            UpdateWorkoutDto,
            ChangeStatusDto,
            CreatedWorkout,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Admin and trainer sign-in"),
        (name = "Admins", description = "Administrator management"),
        (name = "Trainers", description = "Trainer management and revenue"),
        (name = "Clients", description = "Client management"),
        (name = "Workout Types", description = "Priced workout kinds"),
        (name = "Workouts", description = "Scheduled workouts")
    ),
    info(
        title = "Fitness Studio API",
        version = "0.1.0",
        description = "Management API for a fitness studio: admins, trainers, clients, workout types and scheduled workouts, with JWT-based role access."
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
