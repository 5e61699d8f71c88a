mod create_home;
mod list_homes;
mod login_user;
mod register_user;
mod update_home;

pub use create_home::CreateHomeUseCase;
pub use list_homes::ListHomesUseCase;
pub use login_user::LoginUserUseCase;
pub use register_user::RegisterUserUseCase;
pub use update_home::UpdateHomeUseCase;
