use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum ContactMessage {
    Table,
    Id,
    Name,
    Email,
    Subject,
    Message,
    Status,
    IpAddress,
    UserAgent,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum StatusCheck {
    Table,
    Id,
    ClientName,
    CreatedAt,
}
