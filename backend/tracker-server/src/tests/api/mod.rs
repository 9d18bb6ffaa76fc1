mod dto;
