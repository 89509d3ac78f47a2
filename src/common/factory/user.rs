use chrono::Utc;
use entities::user;
use sea_orm::Set;

pub fn user() -> user::ActiveModel {
    let now = Utc::now();
    user::ActiveModel {
        id: Set(uuid::Uuid::now_v7()),
        email: Set(format!("{}@test.com", uuid::Uuid::now_v7())),
        password: Set("password".to_string()),
        name: Set("Siva".to_string()),
        verified: Set(true),
        verification_token: Set(uuid::Uuid::new_v4().simple().to_string()),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
}

pub trait UserFactory {
    fn verified(self, verified: bool) -> user::ActiveModel;
    fn password(self, hashed_password: &str) -> user::ActiveModel;
    fn name(self, name: &str) -> user::ActiveModel;
    fn verification_token(self, token: &str) -> user::ActiveModel;
}

impl UserFactory for user::ActiveModel {
    fn verified(mut self, verified: bool) -> user::ActiveModel {
        self.verified = Set(verified);
        self
    }

    fn password(mut self, hashed_password: &str) -> user::ActiveModel {
        self.password = Set(hashed_password.to_string());
        self
    }

    fn name(mut self, name: &str) -> user::ActiveModel {
        self.name = Set(name.to_string());
        self
    }

    fn verification_token(mut self, token: &str) -> user::ActiveModel {
        self.verification_token = Set(token.to_string());
        self
    }
}
