use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxCatalogRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxProfessionalRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxTechSkillRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxTechRadarRepo {
    pub pool: PgPool,
}
